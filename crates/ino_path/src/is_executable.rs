//! Checking whether a path can be executed.

use std::path::Path;

/// Extension trait for checking if the given path
/// is an executable file.
///
/// Directories are never considered executable here, even
/// though on Unix they carry the search bit.
pub trait IsExecutable
where
    Self: AsRef<Path>
{
    /// Check whether the file pointed by given path is an executable.
    ///
    /// Missing files and files the caller can't execute are
    /// reported as `Ok(false)`, other failures are passed through.
    ///
    /// # Errors
    ///
    /// See [`std::io::Error`]
    fn is_executable( &self ) -> std::io::Result<bool>;
}

/// Whether the error means "there's nothing executable here"
/// rather than an actual failure.
#[ inline ]
fn is_plain_negative( err: &std::io::Error ) -> bool {
    use std::io::ErrorKind;
    matches!( err.kind(),
        ErrorKind::NotFound
        | ErrorKind::PermissionDenied
        | ErrorKind::NotADirectory
    )
}

#[ cfg( unix ) ]
mod unix {

    use super::IsExecutable;
    use super::is_plain_negative;
    use std::path::Path;

    impl IsExecutable for Path {
        #[ inline ]
        fn is_executable( &self ) -> std::io::Result<bool> {
            // Follows symlinks, same as exec(2) does.
            match self.metadata() {
                Ok( meta ) if !meta.is_file() => return Ok( false ),
                Ok( _ ) => {},
                Err( err ) if is_plain_negative( &err ) => return Ok( false ),
                Err( err ) => return Err( err ),
            }

            let ret = {
                use rustix::fs::accessat;
                use rustix::fs::CWD;
                use rustix::fs::Access;
                use rustix::fs::AtFlags;
                accessat( CWD, self, Access::EXEC_OK, AtFlags::empty() )
            };

            match ret {
                Ok(()) => Ok( true ),
                Err( err ) => {
                    let err: std::io::Error = err.into();
                    if is_plain_negative( &err ) {
                        Ok( false )
                    } else {
                        Err( err )
                    }
                },
            }
        }
    }

}

#[ cfg( windows ) ]
mod windows {

    use super::IsExecutable;
    use super::is_plain_negative;
    use std::path::Path;

    // No execute bit, being a regular file is the whole story.
    impl IsExecutable for Path {
        #[ inline ]
        fn is_executable( &self ) -> std::io::Result<bool> {
            match self.metadata() {
                Ok( meta ) => Ok( meta.is_file() ),
                Err( err ) if is_plain_negative( &err ) => Ok( false ),
                Err( err ) => Err( err ),
            }
        }
    }

}

#[ cfg( any( unix, windows ) ) ]
impl IsExecutable for std::path::PathBuf {
    #[ inline ]
    fn is_executable( &self ) -> std::io::Result<bool> {
        self.as_path().is_executable()
    }
}

#[ cfg( all( test, unix ) ) ]
#[ allow( clippy::unwrap_used ) ]
mod test {

    use super::IsExecutable;

    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use assert2::check;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[ test ]
    fn system_shell() {
        check!( Path::new( "/bin/sh" ).is_executable().unwrap() );
    }

    #[ test ]
    fn directory_is_not_executable() {
        check!( !Path::new( "/" ).is_executable().unwrap() );

        let top = TempDir::new().unwrap();
        let dir = top.child( "subdir" );
        dir.create_dir_all().unwrap();
        std::fs::set_permissions( &dir, Permissions::from_mode( 0o755 ) )
            .unwrap();
        check!( !dir.path().is_executable().unwrap() );
    }

    #[ test ]
    fn mode_bits() {
        let top = TempDir::new().unwrap();

        let runnable = top.child( "runnable" );
        runnable.write_str( "#!/bin/sh\n" ).unwrap();
        std::fs::set_permissions( &runnable, Permissions::from_mode( 0o755 ) )
            .unwrap();

        let plain = top.child( "plain" );
        plain.write_str( "just text" ).unwrap();
        std::fs::set_permissions( &plain, Permissions::from_mode( 0o644 ) )
            .unwrap();

        check!( runnable.path().is_executable().unwrap() );
        check!( !plain.path().is_executable().unwrap() );
    }

    #[ test ]
    fn missing_is_not_an_error() {
        let top = TempDir::new().unwrap();
        let ghost = top.child( "ghost" );
        check!( !ghost.path().is_executable().unwrap() );

        // A file standing where a directory is expected
        let file = top.child( "file" );
        file.touch().unwrap();
        check!( !file.path().join( "below" ).is_executable().unwrap() );
    }

    #[ test ]
    fn symlink_to_executable() {
        let top = TempDir::new().unwrap();
        let target = top.child( "target" );
        target.write_str( "#!/bin/sh\n" ).unwrap();
        std::fs::set_permissions( &target, Permissions::from_mode( 0o700 ) )
            .unwrap();

        let link = top.child( "link" );
        link.symlink_to_file( target.path() ).unwrap();
        check!( link.path().is_executable().unwrap() );

        let dangling = top.child( "dangling" );
        dangling.symlink_to_file( top.child( "nowhere" ).path() ).unwrap();
        check!( !dangling.path().is_executable().unwrap() );
    }

}
