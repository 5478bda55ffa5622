use std::collections::HashMap;
use std::ffi::OsString;

use tracing::trace;

use crate::platform::Platform;

/// Where the search-path and extension variables are read from.
///
/// An override replaces the process environment entirely, a
/// variable missing from it is missing, full stop.
#[ derive( Debug, Clone, Copy ) ]
pub enum SearchEnv<'a> {
    Process,
    Override( &'a HashMap<String, String> ),
}

impl<'a> SearchEnv<'a> {
    #[ inline ]
    #[ must_use ]
    pub fn new( overridden: Option<&'a HashMap<String, String>> ) -> Self {
        overridden.map_or( Self::Process, Self::Override )
    }

    /// Read variable `name`.
    ///
    /// Under Windows rules names compare case-insensitively,
    /// an exact match is preferred when several keys qualify.
    #[ tracing::instrument( level = "trace", skip( self ) ) ]
    pub fn var( &self, name: &str, platform: Platform ) -> Option<OsString> {
        let value = match self {
            Self::Process => {
                std::env::var_os( name )
                    .or_else( || {
                        platform.case_insensitive().then( || {
                            std::env::vars_os()
                                .find( |( key, _ )| {
                                    key.to_str()
                                        .is_some_and( |key| key.eq_ignore_ascii_case( name ) )
                                } )
                                .map( |( _, value )| value )
                        } ).flatten()
                    } )
            },
            Self::Override( map ) => {
                map.get( name )
                    .or_else( || {
                        platform.case_insensitive().then( || {
                            map.iter()
                                .find( |( key, _ )| key.eq_ignore_ascii_case( name ) )
                                .map( |( _, value )| value )
                        } ).flatten()
                    } )
                    .map( OsString::from )
            },
        };
        trace!( ?value );
        value
    }
}

#[ cfg( test ) ]
mod test {

    use super::*;

    fn map_of( pairs: &[ ( &str, &str ) ] ) -> HashMap<String, String> {
        pairs.iter()
            .map( |( k, v )| ( (*k).to_owned(), (*v).to_owned() ) )
            .collect()
    }

    #[ test ]
    fn override_replaces_process_env() {
        let map = map_of( &[ ( "PATHEXT", ".EXE" ) ] );
        let env = SearchEnv::new( Some( &map ) );
        // Even when the process has PATH, the override doesn't
        assert_eq!( env.var( "PATH", Platform::Posix ), None );
        assert_eq!( env.var( "PATHEXT", Platform::Windows ),
            Some( OsString::from( ".EXE" ) ) );
    }

    #[ test ]
    fn windows_names_ignore_case() {
        let map = map_of( &[ ( "PATH", "C:\\bin" ) ] );
        let env = SearchEnv::new( Some( &map ) );
        assert_eq!( env.var( "Path", Platform::Windows ),
            Some( OsString::from( "C:\\bin" ) ) );
        assert_eq!( env.var( "Path", Platform::Posix ), None );
    }

    #[ test ]
    fn exact_name_wins() {
        let map = map_of( &[ ( "PATH", "/upper" ), ( "Path", "/exact" ) ] );
        let env = SearchEnv::new( Some( &map ) );
        assert_eq!( env.var( "Path", Platform::Windows ),
            Some( OsString::from( "/exact" ) ) );
    }

    #[ cfg( unix ) ]
    #[ test ]
    fn windows_rules_on_process_env_ignore_case() {
        // The host only has `PATH`, Windows rules ask for `Path`
        let env = SearchEnv::Process;
        assert_eq!( env.var( "Path", Platform::Windows ), std::env::var_os( "PATH" ) );
        assert_eq!( env.var( "pAtH", Platform::Windows ), std::env::var_os( "PATH" ) );
    }

    #[ test ]
    fn process_env_is_default() {
        let env = SearchEnv::new( None );
        assert!( matches!( env, SearchEnv::Process ) );
        assert_eq!( env.var( "PATH", Platform::Posix ), std::env::var_os( "PATH" ) );
    }
}
