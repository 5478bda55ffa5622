use std::path::PathBuf;

use tap::Tap;
use tracing::debug;
use tracing::trace;

use crate::common_paths::COMMON_PATHS;
use crate::env::SearchEnv;
use crate::options::LookupOptions;
use crate::platform::Platform;

/// Directories to search, highest priority first.
///
/// 1. the search-path variable of the effective environment
/// 2. `include`, in given order
/// 3. [`COMMON_PATHS`] if asked for
/// 4. minus everything in `exclude`
#[ tracing::instrument( level = "debug", skip_all ) ]
pub fn build_search_dirs(
    env: &SearchEnv<'_>,
    options: &LookupOptions,
    platform: Platform,
) -> Vec<PathBuf> {
    let from_env = env.var( platform.path_var(), platform )
        .map( |value| {
            platform.split_list( &value )
                .into_iter()
                .map( PathBuf::from )
                .collect::<Vec<_>>()
        } )
        .unwrap_or_else( || {
            debug!( var = platform.path_var(), "search-path variable not set" );
            Vec::new()
        } );

    let common = options.include_common_paths
        .then_some( COMMON_PATHS )
        .unwrap_or_default()
        .iter()
        .map( PathBuf::from );

    from_env.into_iter()
        .chain( options.include.iter().cloned() )
        .chain( common )
        .filter( |dir| {
            let excluded = options.exclude.iter()
                .any( |ex| ex.as_os_str() == dir.as_os_str() );
            if excluded {
                trace!( ?dir, "excluded" );
            }
            !excluded
        } )
        .collect::<Vec<_>>()
        .tap( |dirs| debug!( ?dirs ) )
}

#[ cfg( test ) ]
mod test {

    use super::*;

    use std::collections::HashMap;

    fn dirs_with( path: &str, options: &LookupOptions, platform: Platform )
        -> Vec<PathBuf>
    {
        let map = HashMap::from( [ ( platform.path_var().to_owned(), path.to_owned() ) ] );
        build_search_dirs( &SearchEnv::Override( &map ), options, platform )
    }

    fn paths( items: &[ &str ] ) -> Vec<PathBuf> {
        items.iter().map( PathBuf::from ).collect()
    }

    #[ test ]
    fn env_then_include() {
        let opts = LookupOptions::new().include( "/extra" ).include( "/more" );
        assert_eq!(
            dirs_with( "/usr/bin:/bin", &opts, Platform::Posix ),
            paths( &[ "/usr/bin", "/bin", "/extra", "/more" ] )
        );
    }

    #[ test ]
    fn exclude_applies_to_everything() {
        let opts = LookupOptions::new()
            .include( "/extra" )
            .exclude( "/extra" )
            .exclude( "/bin" );
        assert_eq!(
            dirs_with( "/usr/bin:/bin", &opts, Platform::Posix ),
            paths( &[ "/usr/bin" ] )
        );
    }

    #[ test ]
    fn exclude_is_literal() {
        let opts = LookupOptions::new().exclude( "/bin/" );
        assert_eq!(
            dirs_with( "/bin", &opts, Platform::Posix ),
            paths( &[ "/bin" ] )
        );
    }

    #[ test ]
    fn common_paths_come_last() {
        let opts = LookupOptions::new()
            .include( "/extra" )
            .include_common_paths( true )
            .exclude( "/usr/games" );
        let dirs = dirs_with( "/first", &opts, Platform::Posix );

        assert_eq!( dirs.first(), Some( &PathBuf::from( "/first" ) ) );
        assert_eq!( dirs.get( 1 ), Some( &PathBuf::from( "/extra" ) ) );
        assert_eq!( dirs.len(), 2 + COMMON_PATHS.len() - 1 );
        assert!( !dirs.contains( &PathBuf::from( "/usr/games" ) ) );
        assert_eq!( dirs.last(), COMMON_PATHS.last().map( PathBuf::from ).as_ref() );
    }

    #[ test ]
    fn windows_variable_and_delimiter() {
        let opts = LookupOptions::new();
        assert_eq!(
            dirs_with( r"C:\Windows;C:\Tools", &opts, Platform::Windows ),
            paths( &[ r"C:\Windows", r"C:\Tools" ] )
        );
    }

    #[ test ]
    fn missing_variable_means_include_only() {
        let map = HashMap::new();
        let opts = LookupOptions::new().include( "/only" );
        assert_eq!(
            build_search_dirs( &SearchEnv::Override( &map ), &opts, Platform::Posix ),
            paths( &[ "/only" ] )
        );
    }
}
