use std::path::Path;
use std::path::PathBuf;

use ino_path::PathExt;
use tracing::debug;

use crate::error::LookupError;
use crate::platform::Platform;

/// If `command` names a file location (it has a directory separator
/// in it) rather than a bare program name, return it as an absolute path.
///
/// Purely lexical: the file is not looked at, only the current
/// directory is read to anchor relative paths.
///
/// # Errors
///
/// [`LookupError::Absolutize`] if the current directory is unavailable.
#[ tracing::instrument( level = "debug" ) ]
pub fn direct_path( command: &str, platform: Platform )
    -> Result<Option<PathBuf>, LookupError>
{
    if !command.chars().any( |ch| platform.is_separator( ch ) ) {
        return Ok( None )
    }

    let path = Path::new( command );
    let absolute = path.absolutize()
        .map_err( |source| LookupError::Absolutize {
            path: path.to_owned(),
            source,
        } )?;

    debug!( ?absolute, "command is a direct path" );
    Ok( Some( absolute ) )
}

#[ cfg( test ) ]
#[ allow( clippy::unwrap_used ) ]
mod test {

    use super::*;

    #[ test ]
    fn bare_name() {
        assert_eq!( direct_path( "node", Platform::Posix ).unwrap(), None );
        assert_eq!( direct_path( "node.exe", Platform::Windows ).unwrap(), None );
    }

    #[ test ]
    fn absolute() {
        assert_eq!(
            direct_path( "/abs/bin/tool", Platform::Posix ).unwrap(),
            Some( PathBuf::from( "/abs/bin/tool" ) )
        );
    }

    #[ test ]
    fn relative_is_anchored_at_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let got = direct_path( "./relative/bin/tool", Platform::Posix )
            .unwrap()
            .unwrap();
        assert!( got.is_absolute() );
        assert_eq!( got, cwd.join( "relative/bin/tool" ) );
    }

    #[ test ]
    fn backslash_only_counts_under_windows() {
        assert_eq!( direct_path( r"bin\tool", Platform::Posix ).unwrap(), None );
        let got = direct_path( r"bin\tool", Platform::Windows ).unwrap();
        assert!( got.is_some_and( |it| it.is_absolute() ) );
    }
}
