#![ cfg( unix ) ]
#![ allow( clippy::unwrap_used ) ]
#![ allow( clippy::expect_used ) ]

use assert_fs::prelude::*;
use assert_fs::fixture::ChildPath;
use assert_fs::TempDir;
use lookpath::LookupOptions;
use lookpath::Platform;
use lookpath::Resolution;
use lookpath::lookup;
use lookpath::lookup_sync;

use std::fs::Permissions;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

macro_rules! make_tempdir {
    () => { {
        TempDir::new().expect( "Failed to setup tempdir" )
    } };
}

fn put_file( dir: &TempDir, name: &str, mode: u32 ) -> ChildPath {
    let file = dir.child( name );
    file.write_str( "#!/bin/sh\necho hi\n" ).unwrap();
    std::fs::set_permissions( &file, Permissions::from_mode( mode ) ).unwrap();
    file
}

/// Neither the process nor anything else contributes directories,
/// only what the test adds.
fn isolated() -> LookupOptions {
    LookupOptions::new()
        .env( [ ( "PATH", "" ) ] )
        .platform( Platform::Posix )
}

fn found( path: &ChildPath ) -> Resolution {
    Resolution::First( Some( path.path().to_path_buf() ) )
}

#[ tokio::test ]
async fn nonexistent_command() {
    let res = lookup( "surely-there-is-no-such-command-x9z", &LookupOptions::new() )
        .await.unwrap();
    assert_eq!( res, Resolution::First( None ) );

    let res = lookup_sync( "surely-there-is-no-such-command-x9z",
        &LookupOptions::new().find_all( true ) ).unwrap();
    assert_eq!( res, Resolution::All( vec![] ) );
}

#[ tokio::test ]
async fn executable_vs_not() {
    let top = make_tempdir!();
    let hello = put_file( &top, "hello_world", 0o755 );
    put_file( &top, "goodbye_world", 0o644 );

    let opts = isolated().include( top.path() );

    assert_eq!( lookup( "hello_world", &opts ).await.unwrap(), found( &hello ) );
    assert_eq!( lookup( "goodbye_world", &opts ).await.unwrap(), Resolution::First( None ) );
    assert_eq!( lookup_sync( "hello_world", &opts ).unwrap(), found( &hello ) );
    assert_eq!( lookup_sync( "goodbye_world", &opts ).unwrap(), Resolution::First( None ) );
}

#[ tokio::test ]
async fn resolved_path_is_absolute_and_executable() {
    let res = lookup( "sh", &LookupOptions::new() ).await.unwrap();
    let sh = res.first().expect( "sh should be on PATH" );
    assert!( sh.is_absolute() );
    assert!( sh.is_file() );
}

#[ tokio::test ]
async fn only_reachable_through_include() {
    let top = make_tempdir!();
    put_file( &top, "hello_world", 0o755 );

    let without = lookup( "hello_world", &LookupOptions::new() ).await.unwrap();
    assert!( !without.is_found() );

    let with = lookup( "hello_world", &LookupOptions::new().include( top.path() ) )
        .await.unwrap();
    assert!( with.is_found() );
}

#[ tokio::test ]
async fn exclude_beats_include() {
    let top = make_tempdir!();
    put_file( &top, "hello_world", 0o755 );

    let opts = isolated()
        .include( top.path() )
        .exclude( top.path() );
    assert!( !lookup( "hello_world", &opts ).await.unwrap().is_found() );
    assert!( !lookup_sync( "hello_world", &opts ).unwrap().is_found() );
}

#[ tokio::test ]
async fn first_match_follows_directory_order() {
    let one = make_tempdir!();
    let two = make_tempdir!();
    let in_one = put_file( &one, "tool", 0o755 );
    let in_two = put_file( &two, "tool", 0o755 );

    let opts = isolated().include( two.path() ).include( one.path() );
    assert_eq!( lookup( "tool", &opts ).await.unwrap(), found( &in_two ) );

    let opts = isolated().include( one.path() ).include( two.path() );
    assert_eq!( lookup( "tool", &opts ).await.unwrap(), found( &in_one ) );
    assert_eq!( lookup_sync( "tool", &opts ).unwrap(), found( &in_one ) );
}

#[ tokio::test ]
async fn find_all_dedups_and_keeps_order() {
    let one = make_tempdir!();
    let two = make_tempdir!();
    let empty = make_tempdir!();
    let in_one = put_file( &one, "tool", 0o755 );
    let in_two = put_file( &two, "tool", 0o755 );

    let opts = isolated()
        .include( two.path() )
        .include( empty.path() )
        .include( one.path() )
        .include( two.path() )
        .find_all( true );

    let expect = Resolution::All( vec![
        in_two.path().to_path_buf(),
        in_one.path().to_path_buf(),
    ] );
    assert_eq!( lookup( "tool", &opts ).await.unwrap(), expect );
    assert_eq!( lookup_sync( "tool", &opts ).unwrap(), expect );
}

#[ tokio::test ]
async fn direct_path_ignores_search_options() {
    let top = make_tempdir!();
    let hello = put_file( &top, "hello_world", 0o755 );

    let opts = isolated()
        .exclude( top.path() )
        .include_common_paths( true );
    let command = hello.path().to_str().unwrap();

    assert_eq!( lookup( command, &opts ).await.unwrap(), found( &hello ) );
    assert_eq!( lookup_sync( command, &opts ).unwrap(), found( &hello ) );

    let goodbye = put_file( &top, "goodbye_world", 0o644 );
    let command = goodbye.path().to_str().unwrap();
    let opts = LookupOptions::new().include( top.path() );
    assert!( !lookup( command, &opts ).await.unwrap().is_found() );
}

#[ tokio::test ]
async fn relative_direct_path() {
    let top = make_tempdir!();
    let hello = put_file( &top, "hello_world", 0o755 );

    // Climb from the working directory to `/`, then walk down
    let cwd = std::env::current_dir().unwrap();
    let ups = cwd.components().count() - 1;
    let relative = PathBuf::from( "../".repeat( ups ) )
        .join( hello.path().strip_prefix( "/" ).unwrap() );
    let command = relative.to_str().unwrap();

    let res = lookup( command, &isolated() ).await.unwrap();
    let got = res.first().expect( "relative path should resolve" );
    assert!( got.is_absolute() );
    assert_eq!( got.canonicalize().unwrap(), hello.path().canonicalize().unwrap() );
}

#[ cfg( target_os = "linux" ) ]
#[ tokio::test ]
async fn posix_names_are_case_sensitive() {
    let top = make_tempdir!();
    put_file( &top, "hello_world", 0o755 );

    let opts = isolated().include( top.path() );
    assert!( lookup( "hello_world", &opts ).await.unwrap().is_found() );
    assert!( !lookup( "HELLO_WORLD", &opts ).await.unwrap().is_found() );
}

#[ tokio::test ]
async fn env_override_replaces_process_path() {
    // `sh` is reachable through the real PATH
    assert!( lookup( "sh", &LookupOptions::new() ).await.unwrap().is_found() );

    let top = make_tempdir!();
    let dir = top.path().to_str().unwrap();
    let opts = LookupOptions::new().env( [ ( "PATH", dir ) ] );
    assert!( !lookup( "sh", &opts ).await.unwrap().is_found() );
    assert!( !lookup_sync( "sh", &opts ).unwrap().is_found() );
}

#[ tokio::test ]
async fn env_override_path_is_searched() {
    let top = make_tempdir!();
    let hello = put_file( &top, "hello_world", 0o755 );

    let dir = top.path().to_str().unwrap();
    let opts = LookupOptions::new()
        .env( [ ( "PATH", format!( "/nonexistent-dir:{dir}" ) ) ] );
    assert_eq!( lookup( "hello_world", &opts ).await.unwrap(), found( &hello ) );
}

#[ tokio::test ]
async fn directory_named_like_command() {
    let top = make_tempdir!();
    top.child( "tool" ).create_dir_all().unwrap();

    let opts = isolated().include( top.path() );
    assert!( !lookup( "tool", &opts ).await.unwrap().is_found() );
}

#[ tokio::test ]
async fn windows_rules_use_pathext() {
    let top = make_tempdir!();
    let exe = put_file( &top, "tool.EXE", 0o755 );
    let bare = put_file( &top, "tool", 0o755 );
    put_file( &top, "tool.BAT", 0o644 );

    let dir = top.path().to_str().unwrap();
    let opts = LookupOptions::new()
        .env( [ ( "Path", dir ), ( "PATHEXT", ".BAT;.CMD;.EXE" ) ] )
        .platform( Platform::Windows );

    assert_eq!( lookup( "tool", &opts ).await.unwrap(), found( &exe ) );
    assert_eq!( lookup_sync( "tool", &opts ).unwrap(), found( &exe ) );

    let opts = opts.find_all( true );
    let expect = Resolution::All( vec![
        exe.path().to_path_buf(),
        bare.path().to_path_buf(),
    ] );
    assert_eq!( lookup( "tool", &opts ).await.unwrap(), expect );
}

#[ tokio::test ]
async fn windows_direct_path_gets_suffixes() {
    let top = make_tempdir!();
    let cmd = put_file( &top, "run.CMD", 0o755 );

    let opts = LookupOptions::new()
        .env( [ ( "PATHEXT", ".CMD" ) ] )
        .platform( Platform::Windows );
    let command = top.child( "run" );
    let command = command.path().to_str().unwrap();

    assert_eq!( lookup( command, &opts ).await.unwrap(), found( &cmd ) );
}

#[ tokio::test ]
async fn invalid_options_fail_before_probing() {
    let opts = LookupOptions::new().include( "" );
    let err = lookup( "sh", &opts ).await.unwrap_err();
    assert!( err.to_string().contains( "include" ) );
}
