mod is_executable;
pub use is_executable::IsExecutable;

use std::ffi::OsStr;
use std::io::Result as IoResult;
use std::path::Path;
use std::path::PathBuf;

/// Extra functions to work with [`Path`].
#[ allow( clippy::missing_errors_doc ) ]
pub trait PathExt {
    /// Append `suffix` to the path as raw bytes.
    ///
    /// Unlike [`Path::with_extension`] nothing already present
    /// is replaced, `"foo.sh"` + `".exe"` gives `"foo.sh.exe"`.
    /// An empty suffix yields the path unchanged.
    fn with_suffix( &self, suffix: &OsStr ) -> PathBuf;

    /// Make the path absolute against the current directory
    /// without touching the filesystem otherwise.
    ///
    /// Symlinks and `..` are kept as-is, see [`std::path::absolute`].
    fn absolutize( &self ) -> IoResult<PathBuf>;
}

impl PathExt for Path {
    #[ inline ]
    fn with_suffix( &self, suffix: &OsStr ) -> PathBuf {
        let mut raw = self.as_os_str().to_owned();
        raw.push( suffix );
        raw.into()
    }

    #[ inline ]
    fn absolutize( &self ) -> IoResult<PathBuf> {
        if self.is_absolute() {
            Ok( self.to_owned() )
        } else {
            std::path::absolute( self )
        }
    }
}

#[ cfg( test ) ]
#[ allow( clippy::unwrap_used ) ]
mod test {

    use super::*;

    use assert2::check;

    #[ test ]
    fn with_suffix() {
        let base = Path::new( "/usr/bin/tool" );
        check!( base.with_suffix( OsStr::new( "" ) ) == base );
        check!( base.with_suffix( OsStr::new( ".exe" ) )
            == Path::new( "/usr/bin/tool.exe" ) );

        let dotted = Path::new( "run.sh" );
        check!( dotted.with_suffix( OsStr::new( ".CMD" ) )
            == Path::new( "run.sh.CMD" ) );
    }

    #[ test ]
    fn absolutize() {
        let abs = Path::new( "/abs/bin/tool" );
        check!( abs.absolutize().unwrap() == abs );

        let cwd = std::env::current_dir().unwrap();
        let rel = Path::new( "relative/bin/tool" ).absolutize().unwrap();
        check!( rel.is_absolute() );
        check!( rel == cwd.join( "relative/bin/tool" ) );
    }
}
