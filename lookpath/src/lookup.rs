use std::path::PathBuf;

use futures::future::join_all;
use ino_path::PathExt;
use itertools::Itertools;
use tap::Pipe;
use tracing::debug;
use tracing::trace;

use crate::direct::direct_path;
use crate::env::SearchEnv;
use crate::error::LookupError;
use crate::extension::applicable_extensions;
use crate::options::LookupOptions;
use crate::probe;
use crate::search::build_search_dirs;

/// Outcome of a lookup.
#[ derive( Debug, Clone, PartialEq, Eq ) ]
pub enum Resolution {
    /// First-match mode. `None` when nothing was found.
    First( Option<PathBuf> ),
    /// Find-all mode. Empty when nothing was found.
    All( Vec<PathBuf> ),
}

impl Resolution {
    /// The highest priority match, in either mode.
    #[ must_use ]
    pub fn first( &self ) -> Option<&PathBuf> {
        match self {
            Self::First( found ) => found.as_ref(),
            Self::All( found ) => found.first(),
        }
    }

    #[ must_use ]
    pub fn is_found( &self ) -> bool {
        self.first().is_some()
    }

    /// All matches, highest priority first.
    #[ must_use ]
    pub fn into_paths( self ) -> Vec<PathBuf> {
        match self {
            Self::First( found ) => found.into_iter().collect(),
            Self::All( found ) => found,
        }
    }
}

/// Every candidate file for one lookup, in priority order:
/// directory order first, then suffix order within a directory.
#[ derive( Debug ) ]
struct Plan {
    candidates: Vec<PathBuf>,
    find_all: bool,
}

impl Plan {
    #[ tracing::instrument( name = "plan_new", level = "debug", skip( options ) ) ]
    fn new( command: &str, options: &LookupOptions ) -> Result<Self, LookupError> {
        Self::validate_command( command )?;
        options.validate()?;

        let platform = options.resolved_platform();
        let env = SearchEnv::new( options.env.as_ref() );
        debug!( ?platform, overridden_env = options.env.is_some() );

        let bases: Vec<PathBuf> = if let Some( direct ) = direct_path( command, platform )? {
            vec![ direct ]
        } else {
            build_search_dirs( &env, options, platform )
                .into_iter()
                .filter_map( |dir| {
                    let base = dir.join( command );
                    base.absolutize()
                        .inspect_err( |err| {
                            trace!( ?base, ?err, "can't make absolute, skip this directory" );
                        } )
                        .ok()
                } )
                .collect()
        };

        let extensions = applicable_extensions( &env, platform );

        let candidates = bases.iter()
            .cartesian_product( &extensions )
            .map( |( base, ext )| base.with_suffix( ext ) )
            .collect_vec();

        trace!( ?candidates );

        Ok( Self { candidates, find_all: options.find_all } )
    }

    fn validate_command( command: &str ) -> Result<(), LookupError> {
        let reason = if command.is_empty() {
            "command is empty"
        } else if command.contains( '\0' ) {
            "command contains a NUL byte"
        } else {
            return Ok(())
        };
        Err( LookupError::InvalidCommand { command: command.to_owned(), reason } )
    }

    /// Pick the answer from probe outcomes given in candidate order.
    fn select<I>( &self, outcomes: I ) -> Resolution
    where
        I: IntoIterator<Item = Option<PathBuf>>
    {
        let mut found = outcomes.into_iter().flatten();
        if self.find_all {
            found.unique().collect_vec().pipe( Resolution::All )
        } else {
            found.next().pipe( Resolution::First )
        }
    }
}

/// Locate `command` the way a shell would, probing every candidate
/// concurrently.
///
/// The answer depends only on search order, never on which probe
/// finished first.
///
/// # Errors
///
/// Only for malformed input, see [`LookupError`].
/// Not finding anything is an `Ok`.
///
/// # Panics
///
/// If polled outside of a tokio runtime, probes are handed to
/// [`tokio::task::spawn_blocking`].
#[ tracing::instrument( skip( options ) ) ]
pub async fn lookup( command: &str, options: &LookupOptions )
    -> Result<Resolution, LookupError>
{
    let plan = Plan::new( command, options )?;

    let outcomes = plan.candidates.iter()
        .cloned()
        .map( probe::probe )
        .pipe( join_all )
        .await;

    let resolution = plan.select( outcomes );
    debug!( ?resolution );
    Ok( resolution )
}

/// Blocking counterpart of [`lookup`], same answers.
///
/// Probes run one after another; in first-match mode it stops
/// at the first hit since later candidates can't win anyway.
///
/// # Errors
///
/// Only for malformed input, see [`LookupError`].
#[ tracing::instrument( skip( options ) ) ]
pub fn lookup_sync( command: &str, options: &LookupOptions )
    -> Result<Resolution, LookupError>
{
    let plan = Plan::new( command, options )?;

    let resolution = if plan.find_all {
        plan.candidates.iter()
            .cloned()
            .map( probe::probe_sync )
            .pipe( |outcomes| plan.select( outcomes ) )
    } else {
        plan.candidates.iter()
            .cloned()
            .find_map( probe::probe_sync )
            .pipe( Resolution::First )
    };

    debug!( ?resolution );
    Ok( resolution )
}

#[ cfg( test ) ]
#[ allow( clippy::unwrap_used ) ]
mod test {

    use super::*;

    use crate::platform::Platform;

    #[ test ]
    fn rejects_bad_commands() {
        let opts = LookupOptions::new();
        assert!( matches!( lookup_sync( "", &opts ),
            Err( LookupError::InvalidCommand { .. } ) ) );
        assert!( matches!( lookup_sync( "no\0pe", &opts ),
            Err( LookupError::InvalidCommand { .. } ) ) );
    }

    #[ test ]
    fn plan_order_is_dir_then_suffix() {
        let opts = LookupOptions::new()
            .env( [ ( "Path", "/one;/two" ), ( "PATHEXT", ".EXE;.CMD" ) ] )
            .platform( Platform::Windows );
        let plan = Plan::new( "tool", &opts ).unwrap();
        let expect = [
            "/one/tool.EXE", "/one/tool.CMD", "/one/tool",
            "/two/tool.EXE", "/two/tool.CMD", "/two/tool",
        ].map( PathBuf::from );
        assert_eq!( plan.candidates, expect );
    }

    #[ test ]
    fn plan_direct_path_skips_search_dirs() {
        let opts = LookupOptions::new()
            .env( [ ( "PATH", "/one" ) ] )
            .include( "/two" )
            .include_common_paths( true )
            .platform( Platform::Posix );
        let plan = Plan::new( "/abs/bin/tool", &opts ).unwrap();
        assert_eq!( plan.candidates, vec![ PathBuf::from( "/abs/bin/tool" ) ] );
    }

    #[ test ]
    fn select_by_position() {
        let plan = Plan { candidates: vec![], find_all: false };
        let outcomes = vec![
            None,
            Some( PathBuf::from( "/b/x" ) ),
            Some( PathBuf::from( "/c/x" ) ),
        ];
        assert_eq!( plan.select( outcomes ),
            Resolution::First( Some( PathBuf::from( "/b/x" ) ) ) );
    }

    #[ test ]
    fn select_all_dedups() {
        let plan = Plan { candidates: vec![], find_all: true };
        let outcomes = vec![
            Some( PathBuf::from( "/a/x" ) ),
            None,
            Some( PathBuf::from( "/b/x" ) ),
            Some( PathBuf::from( "/a/x" ) ),
        ];
        assert_eq!( plan.select( outcomes ),
            Resolution::All( vec![ PathBuf::from( "/a/x" ), PathBuf::from( "/b/x" ) ] ) );
    }

    #[ test ]
    fn resolution_helpers() {
        let none = Resolution::First( None );
        assert!( !none.is_found() );
        assert!( none.into_paths().is_empty() );

        let all = Resolution::All( vec![ PathBuf::from( "/a" ), PathBuf::from( "/b" ) ] );
        assert_eq!( all.first(), Some( &PathBuf::from( "/a" ) ) );
        assert_eq!( all.into_paths().len(), 2 );
    }
}
