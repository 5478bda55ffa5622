use std::ffi::OsString;

use itertools::Itertools;
use tracing::debug;

use crate::env::SearchEnv;
use crate::platform::Platform;

/// What `cmd.exe` falls back to when `PATHEXT` is unset.
pub const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Every suffix to try, in order, when turning a candidate base
/// path into filenames to probe.
///
/// The empty suffix is always present (last under Windows rules,
/// alone under Posix ones) so the bare name is probed too.
#[ tracing::instrument( level = "debug", skip( env ) ) ]
pub fn applicable_extensions( env: &SearchEnv<'_>, platform: Platform )
    -> Vec<OsString>
{
    if !platform.uses_extensions() {
        return vec![ OsString::new() ];
    }

    let pathext = env.var( "PATHEXT", platform )
        .unwrap_or_else( || {
            debug!( "PATHEXT not set, using the default" );
            DEFAULT_PATHEXT.into()
        } );

    let extensions = platform.split_list( &pathext )
        .iter()
        .map( |ext| ext.to_string_lossy().trim().to_owned() )
        .filter( |ext| !ext.is_empty() )
        .chain( std::iter::once( String::new() ) )
        .unique_by( |ext| ext.to_ascii_lowercase() )
        .map( OsString::from )
        .collect_vec();

    debug!( ?extensions );
    extensions
}

#[ cfg( test ) ]
mod test {

    use super::*;

    use std::collections::HashMap;

    fn exts( pathext: Option<&str>, platform: Platform ) -> Vec<OsString> {
        let map = pathext.into_iter()
            .map( |v| ( "PATHEXT".to_owned(), v.to_owned() ) )
            .collect::<HashMap<_, _>>();
        applicable_extensions( &SearchEnv::Override( &map ), platform )
    }

    fn os( items: &[ &str ] ) -> Vec<OsString> {
        items.iter().map( OsString::from ).collect()
    }

    #[ test ]
    fn posix_has_only_bare_name() {
        assert_eq!( exts( Some( ".EXE;.BAT" ), Platform::Posix ), os( &[ "" ] ) );
    }

    #[ test ]
    fn windows_reads_pathext() {
        assert_eq!(
            exts( Some( ".EXE;.CMD" ), Platform::Windows ),
            os( &[ ".EXE", ".CMD", "" ] )
        );
    }

    #[ test ]
    fn windows_dedups_in_order() {
        assert_eq!(
            exts( Some( ".CMD; .exe;.EXE;;.CMD" ), Platform::Windows ),
            os( &[ ".CMD", ".exe", "" ] )
        );
    }

    #[ test ]
    fn windows_default_when_unset() {
        assert_eq!(
            exts( None, Platform::Windows ),
            os( &[ ".COM", ".EXE", ".BAT", ".CMD", "" ] )
        );
    }
}
