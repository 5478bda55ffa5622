//! Everything that differs between Windows-like and Posix-like
//! systems lives here, so callers only ever branch on [`Platform`].

use std::ffi::OsStr;
use std::ffi::OsString;

/// How executables are located on the target system.
#[ derive( Debug, Clone, Copy, PartialEq, Eq, Hash ) ]
pub enum Platform {
    /// `PATH` split on `:`, case-sensitive names, no suffixes.
    Posix,
    /// `Path` split on `;`, names matched by the (case-insensitive)
    /// filesystem, suffixes taken from `PATHEXT`.
    Windows,
}

impl Platform {
    /// Classify the platform this program is running on.
    #[ must_use ]
    #[ inline ]
    pub const fn current() -> Self {
        if cfg!( windows ) { Self::Windows } else { Self::Posix }
    }

    /// Name of the search-path environment variable.
    #[ must_use ]
    #[ inline ]
    pub const fn path_var( self ) -> &'static str {
        match self {
            Self::Posix => "PATH",
            Self::Windows => "Path",
        }
    }

    /// Delimiter between entries of a path list.
    #[ must_use ]
    #[ inline ]
    pub const fn list_delimiter( self ) -> u8 {
        match self {
            Self::Posix => b':',
            Self::Windows => b';',
        }
    }

    /// Whether `ch` separates directories in a path.
    #[ must_use ]
    #[ inline ]
    pub const fn is_separator( self, ch: char ) -> bool {
        match self {
            Self::Posix => ch == '/',
            Self::Windows => ch == '/' || ch == '\\',
        }
    }

    /// Whether a command may be run by naming it without
    /// its suffix, e.g. `node` for `node.exe`.
    #[ must_use ]
    #[ inline ]
    pub const fn uses_extensions( self ) -> bool {
        matches!( self, Self::Windows )
    }

    /// Whether environment variable names and suffixes
    /// compare case-insensitively.
    #[ must_use ]
    #[ inline ]
    pub const fn case_insensitive( self ) -> bool {
        matches!( self, Self::Windows )
    }

    /// Split a path list (the value of `PATH` or `PATHEXT`)
    /// into its entries. Empty entries are dropped.
    ///
    /// Works on the raw encoded bytes, entries that aren't valid
    /// UTF-8 come out untouched.
    pub fn split_list( self, value: &OsStr ) -> Vec<OsString> {
        let delimiter = self.list_delimiter();
        value.as_encoded_bytes()
            .split( |byte| *byte == delimiter )
            .filter( |entry| !entry.is_empty() )
            // SAFETY: `value` is a valid `OsStr` and it's only ever cut
            // right around an ASCII delimiter, which is a boundary
            // `from_encoded_bytes_unchecked` accepts.
            .map( |entry| unsafe { OsStr::from_encoded_bytes_unchecked( entry ) } )
            .map( OsStr::to_os_string )
            .collect()
    }
}

impl Default for Platform {
    #[ inline ]
    fn default() -> Self {
        Self::current()
    }
}

#[ cfg( test ) ]
mod test {

    use super::*;

    fn os( items: &[ &str ] ) -> Vec<OsString> {
        items.iter().map( OsString::from ).collect()
    }

    #[ test ]
    fn policy_table() {
        assert_eq!( Platform::Posix.path_var(), "PATH" );
        assert_eq!( Platform::Windows.path_var(), "Path" );
        assert_eq!( Platform::Posix.list_delimiter(), b':' );
        assert_eq!( Platform::Windows.list_delimiter(), b';' );
        assert!( !Platform::Posix.uses_extensions() );
        assert!( Platform::Windows.uses_extensions() );
    }

    #[ test ]
    fn separators() {
        assert!( Platform::Posix.is_separator( '/' ) );
        assert!( !Platform::Posix.is_separator( '\\' ) );
        assert!( Platform::Windows.is_separator( '/' ) );
        assert!( Platform::Windows.is_separator( '\\' ) );
    }

    #[ test ]
    fn split_uses_policy_delimiter() {
        let value = OsStr::new( "/usr/bin::/bin" );
        assert_eq!(
            Platform::Posix.split_list( value ),
            os( &[ "/usr/bin", "/bin" ] )
        );
        // Not a delimiter under Windows rules
        assert_eq!(
            Platform::Windows.split_list( value ),
            os( &[ "/usr/bin::/bin" ] )
        );

        let value = OsStr::new( r"C:\Windows;;C:\Tools;" );
        assert_eq!(
            Platform::Windows.split_list( value ),
            os( &[ r"C:\Windows", r"C:\Tools" ] )
        );
    }

    #[ cfg( unix ) ]
    #[ test ]
    fn split_keeps_non_utf8_entries() {
        use std::os::unix::ffi::OsStrExt;

        let value = OsStr::from_bytes( b"/tmp/bin\xFF:/usr/bin" );
        let entries = Platform::Posix.split_list( value );
        assert_eq!( entries, vec![
            OsStr::from_bytes( b"/tmp/bin\xFF" ).to_os_string(),
            OsString::from( "/usr/bin" ),
        ] );
    }

    #[ test ]
    fn current_matches_host() {
        if cfg!( windows ) {
            assert_eq!( Platform::current(), Platform::Windows );
        } else {
            assert_eq!( Platform::current(), Platform::Posix );
        }
    }
}
