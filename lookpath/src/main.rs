use anyhow::Context;
use anyhow::Result as AnyResult;
use lookpath::LookupOptions;
use lookpath::Resolution;
use tap::Tap;
use tracing::debug;
use tracing::trace;

use std::path::PathBuf;
use std::process::ExitCode;

/// Find where an executable lives, like `which(1)`.
#[ derive( clap::Parser, Debug ) ]
struct CliOpts {
    /// Name of the command, or a path to it.
    command: String,

    /// Print every match instead of only the first one.
    #[ arg( long, short ) ]
    all: bool,

    /// Also search this directory, after $PATH. Repeatable.
    #[ arg( long, short = 'I', value_name = "DIR" ) ]
    include: Vec<PathBuf>,

    /// Never search this directory. Repeatable.
    #[ arg( long, short = 'X', value_name = "DIR" ) ]
    exclude: Vec<PathBuf>,

    /// Also search well-known install locations
    /// (/usr/local/bin, homebrew, ~/.cargo/bin, ...).
    #[ arg( long, short = 'C' ) ]
    common_paths: bool,

    /// Probe candidates one by one instead of all at once.
    #[ arg( long ) ]
    sync: bool,
}

impl CliOpts {
    #[ inline ]
    fn parse() -> Self {
        <Self as clap::Parser>::parse()
    }

    fn to_lookup_options( &self ) -> LookupOptions {
        LookupOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            include_common_paths: self.common_paths,
            find_all: self.all,
            ..LookupOptions::default()
        }
    }
}

struct App;

impl App {

    #[ tracing::instrument( name = "app_run_with", skip_all ) ]
    async fn run_with( cliopts: CliOpts ) -> AnyResult<Resolution> {
        let options = cliopts.to_lookup_options()
            .tap( |it| trace!( ?it ) );

        let resolution = if cliopts.sync {
            debug!( "Use the blocking resolver" );
            lookpath::lookup_sync( &cliopts.command, &options )
        } else {
            lookpath::lookup( &cliopts.command, &options ).await
        };

        resolution.with_context( || format!(
            r#"Failed to look up "{}""#, cliopts.command
        ) )
    }

}

/// Logs go to stderr, stdout is reserved for the answer.
fn init_tracing_subscriber() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    use std::io::IsTerminal;

    let output = std::io::stderr;

    let fmt_layer = fmt::layer()
        .with_writer( output )
        .with_ansi( output().is_terminal() )
        .with_target( false )
    ;

    let env_layer = EnvFilter::builder()
        .with_default_directive( LevelFilter::WARN.into() )
        .from_env_lossy()
    ;

    registry()
        .with( fmt_layer )
        .with( env_layer )
        .init();
}

#[ tokio::main( flavor = "current_thread" ) ]
async fn main() -> ExitCode {
    init_tracing_subscriber();

    let cliopts = {
        debug!( "Parse cliopts" );
        CliOpts::parse().tap( |it| trace!( ?it ) )
    };
    let command = cliopts.command.clone();

    match App::run_with( cliopts ).await {
        Ok( resolution ) if resolution.is_found() => {
            resolution.into_paths()
                .iter()
                .for_each( |path| println!( "{}", path.display() ) );
            ExitCode::SUCCESS
        },
        Ok( _ ) => {
            eprintln!( "Not found: {command}" );
            ExitCode::FAILURE
        },
        Err( err ) => {
            eprintln!( "{err:?}" );
            ExitCode::FAILURE
        },
    }
}
