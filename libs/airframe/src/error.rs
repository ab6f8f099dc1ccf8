use nom::Needed;

use crate::frame::components::FrameControl;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// This library only models the management subtypes a fake access point
    /// needs. Any other subtype lands here. The [FrameControl] header parses
    /// in all scenarios and is included for debugging, together with the
    /// remaining payload.
    #[error("This frame subtype isn't handled: {:?} ({:?})", .0.frame_subtype, .0.frame_type)]
    UnhandledFrameSubtype(FrameControl, Vec<u8>),
    #[error("A parsing failure occurred: \n{}\ndata: {:?}", .0, .1)]
    Failure(String, Vec<u8>),
    #[error("There wasn't enough data. {}", .0)]
    Incomplete(String),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    /// Manually specify the conversion from a [nom::error::Error] to our own error.
    /// We need this conversion, since we work with slices.
    /// If nom's error were propagated through the program, we would get lifetime
    /// issues, as we can't hold ownership of that slice and would require 'static.
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => match needed {
                Needed::Size(size) => {
                    Error::Incomplete(format!("At least {size} bytes are missing"))
                }
                Needed::Unknown => Error::Incomplete(String::new()),
            },
            nom::Err::Failure(error) | nom::Err::Error(error) => Error::Failure(
                format!(
                    "An error occured while parsing the data: nom::ErrorKind is {:?}",
                    error.code
                ),
                error.input.to_vec(),
            ),
        }
    }
}
