use std::path::PathBuf;

/// Failures that stop a lookup before anything is probed.
///
/// Not finding the command is not an error, see [`crate::Resolution`].
#[ derive( thiserror::Error, Debug ) ]
pub enum LookupError {
    #[ error( "Invalid command {command:?}: {reason}" ) ]
    InvalidCommand {
        command: String,
        reason: &'static str,
    },

    #[ error( r#"Invalid entry {entry:?} in option "{option}": {reason}"# ) ]
    InvalidOption {
        option: &'static str,
        entry: PathBuf,
        reason: &'static str,
    },

    #[ error( r#"Failed to make "{}" absolute"#, path.display() ) ]
    Absolutize {
        path: PathBuf,
        #[ source ]
        source: std::io::Error,
    },
}
