//! Lives in its own test binary since it changes the working
//! directory of the whole process.

#![ cfg( target_os = "linux" ) ]
#![ allow( clippy::unwrap_used ) ]
#![ allow( clippy::expect_used ) ]

use assert_fs::TempDir;
use lookpath::LookupOptions;
use lookpath::Platform;
use lookpath::lookup;
use lookpath::lookup_sync;

#[ tokio::test ]
async fn relative_entry_with_removed_cwd_is_skipped() {
    let gone = TempDir::new()
        .expect( "Failed to setup tempdir" )
        .into_persistent();
    std::env::set_current_dir( gone.path() ).unwrap();
    std::fs::remove_dir( gone.path() ).unwrap();
    assert!( std::env::current_dir().is_err() );

    let opts = LookupOptions::new()
        .env( [ ( "PATH", "relbin:/bin:/usr/bin" ) ] )
        .platform( Platform::Posix );

    let res = lookup_sync( "sh", &opts ).unwrap();
    let sh = res.first().expect( "sh should be found past the relative entry" );
    assert!( sh.is_absolute() );
    assert!( sh.ends_with( "sh" ) );

    let res = lookup( "sh", &opts ).await.unwrap();
    assert!( res.is_found() );

    // A relative direct path still has nothing to anchor to
    assert!( lookup_sync( "./sh", &opts ).is_err() );
}
