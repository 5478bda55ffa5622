use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use crate::error::LookupError;
use crate::platform::Platform;

/// Knobs for a single lookup. The default searches `$PATH`
/// of the current process and returns the first match.
#[ derive( Debug, Clone, Default ) ]
pub struct LookupOptions {
    /// Extra directories searched after the search-path variable.
    pub include: Vec<PathBuf>,
    /// Directories never searched, compared literally.
    /// Applied after `include` and the common paths.
    pub exclude: Vec<PathBuf>,
    /// Also search [`crate::COMMON_PATHS`].
    pub include_common_paths: bool,
    /// Return every match instead of only the first.
    pub find_all: bool,
    /// Replaces (not merges with) the process environment
    /// when reading `PATH` and `PATHEXT`.
    pub env: Option<HashMap<String, String>>,
    /// Rules to follow, defaults to the host's.
    pub platform: Option<Platform>,
}

impl LookupOptions {
    #[ inline ]
    #[ must_use ]
    pub fn new() -> Self {
        Self::default()
    }

    #[ must_use ]
    pub fn include( mut self, dir: impl Into<PathBuf> ) -> Self {
        self.include.push( dir.into() );
        self
    }

    #[ must_use ]
    pub fn exclude( mut self, dir: impl Into<PathBuf> ) -> Self {
        self.exclude.push( dir.into() );
        self
    }

    #[ inline ]
    #[ must_use ]
    pub fn include_common_paths( mut self, yes: bool ) -> Self {
        self.include_common_paths = yes;
        self
    }

    #[ inline ]
    #[ must_use ]
    pub fn find_all( mut self, yes: bool ) -> Self {
        self.find_all = yes;
        self
    }

    #[ must_use ]
    pub fn env<K, V>( mut self, vars: impl IntoIterator<Item = ( K, V )> ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = vars.into_iter()
            .map( |( k, v )| ( k.into(), v.into() ) )
            .collect::<HashMap<_, _>>()
            .into();
        self
    }

    #[ inline ]
    #[ must_use ]
    pub fn platform( mut self, platform: Platform ) -> Self {
        self.platform = Some( platform );
        self
    }

    /// The platform rules in effect for this lookup.
    #[ inline ]
    #[ must_use ]
    pub fn resolved_platform( &self ) -> Platform {
        self.platform.unwrap_or_default()
    }

    /// Reject malformed directory entries.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidOption`] naming the first offending entry.
    pub fn validate( &self ) -> Result<(), LookupError> {
        let all_entries = self.include.iter()
            .map( |it| ( "include", it ) )
            .chain( self.exclude.iter().map( |it| ( "exclude", it ) ) );

        for ( option, entry ) in all_entries {
            if let Some( reason ) = Self::entry_problem( entry ) {
                return Err( LookupError::InvalidOption {
                    option,
                    entry: entry.clone(),
                    reason,
                } )
            }
        }

        Ok(())
    }

    fn entry_problem( entry: &Path ) -> Option<&'static str> {
        let raw = entry.as_os_str();
        if raw.is_empty() {
            Some( "directory is empty" )
        } else if raw.as_encoded_bytes().contains( &0 ) {
            Some( "directory contains a NUL byte" )
        } else {
            None
        }
    }
}

#[ cfg( test ) ]
#[ allow( clippy::unwrap_used ) ]
mod test {

    use super::*;

    #[ test ]
    fn builder() {
        let opts = LookupOptions::new()
            .include( "/a" )
            .include( "/b" )
            .exclude( "/a" )
            .find_all( true )
            .env( [ ( "PATH", "/x" ) ] )
            .platform( Platform::Windows );

        assert_eq!( opts.include, vec![ PathBuf::from( "/a" ), PathBuf::from( "/b" ) ] );
        assert_eq!( opts.exclude, vec![ PathBuf::from( "/a" ) ] );
        assert!( opts.find_all );
        assert!( !opts.include_common_paths );
        assert_eq!( opts.env.as_ref().and_then( |e| e.get( "PATH" ) ).map( String::as_str ), Some( "/x" ) );
        assert_eq!( opts.resolved_platform(), Platform::Windows );
    }

    #[ test ]
    fn default_platform_is_host() {
        assert_eq!( LookupOptions::new().resolved_platform(), Platform::current() );
    }

    #[ test ]
    fn validate_rejects_empty_entry() {
        let err = LookupOptions::new()
            .include( "/fine" )
            .exclude( "" )
            .validate()
            .unwrap_err();
        assert!( matches!( err, LookupError::InvalidOption { option: "exclude", .. } ) );
    }

    #[ test ]
    fn validate_rejects_nul() {
        let err = LookupOptions::new()
            .include( "/bad\0dir" )
            .validate()
            .unwrap_err();
        assert!( matches!( err, LookupError::InvalidOption { option: "include", .. } ) );
    }

    #[ test ]
    fn validate_accepts_defaults() {
        assert!( LookupOptions::new().validate().is_ok() );
    }
}
