//! Single existence-and-permission checks, blocking or not.
//!
//! Probing never fails: whatever goes wrong with one candidate
//! only means that candidate isn't an answer.

use std::path::PathBuf;

use ino_path::IsExecutable;
use tracing::trace;

/// Blocking probe. `Some(path)` if `path` is an executable file.
#[ tracing::instrument( level = "trace" ) ]
pub fn probe_sync( path: PathBuf ) -> Option<PathBuf> {
    match path.is_executable() {
        Ok( true ) => Some( path ),
        Ok( false ) => None,
        Err( err ) => {
            trace!( ?err, "probe failed, treating as not executable" );
            None
        },
    }
}

/// Non-blocking probe, the check runs on the blocking pool of the
/// current tokio runtime.
///
/// # Panics
///
/// If called outside of a tokio runtime.
#[ tracing::instrument( level = "trace" ) ]
pub async fn probe( path: PathBuf ) -> Option<PathBuf> {
    tokio::task::spawn_blocking( move || probe_sync( path ) )
        .await
        .unwrap_or_else( |err| {
            trace!( ?err, "probe task failed" );
            None
        } )
}

#[ cfg( all( test, unix ) ) ]
#[ allow( clippy::unwrap_used ) ]
mod test {

    use super::*;

    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn fixture() -> ( TempDir, PathBuf, PathBuf ) {
        let top = TempDir::new().unwrap();
        let yes = top.child( "yes" );
        yes.write_str( "#!/bin/sh\n" ).unwrap();
        std::fs::set_permissions( &yes, Permissions::from_mode( 0o755 ) ).unwrap();
        let no = top.child( "no" );
        no.write_str( "#!/bin/sh\n" ).unwrap();
        std::fs::set_permissions( &no, Permissions::from_mode( 0o644 ) ).unwrap();
        let ( yes, no ) = ( yes.path().to_path_buf(), no.path().to_path_buf() );
        ( top, yes, no )
    }

    #[ test ]
    fn sync_probe() {
        let ( top, yes, no ) = fixture();
        assert_eq!( probe_sync( yes.clone() ), Some( yes ) );
        assert_eq!( probe_sync( no ), None );
        assert_eq!( probe_sync( top.path().to_owned() ), None );
        assert_eq!( probe_sync( top.child( "absent" ).path().to_path_buf() ), None );
    }

    #[ tokio::test ]
    async fn async_probe() {
        let ( top, yes, no ) = fixture();
        assert_eq!( probe( yes.clone() ).await, Some( yes ) );
        assert_eq!( probe( no ).await, None );
        assert_eq!( probe( top.path().to_owned() ).await, None );
    }
}
