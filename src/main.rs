#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fretboard::{cli, init_logging, Neck, NeckView, DEFAULT_FRET_COUNT};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Draw a guitar fretboard with chord fingerings", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Print the fretboard with the given chords applied.
    Show {
        #[arg(long, default_value_t = DEFAULT_FRET_COUNT)]
        frets: usize,
        #[arg(
            long,
            help = "Chord as fret,string,finger triples (e.g. --chord 1,G,index,2,D,ring); repeatable"
        )]
        chord: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Enter chords one at a time and redraw the board after each.
    Interactive {
        #[arg(long, default_value_t = DEFAULT_FRET_COUNT)]
        frets: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            frets,
            chord,
            format,
        } => {
            let mut neck = Neck::new(frets).map_err(|e| anyhow::anyhow!(e))?;
            let chords = match cli::parse_chords(&chord, neck.fret_count()) {
                Ok(chords) => chords,
                Err(problems) => {
                    for p in &problems {
                        eprintln!("{}", p);
                    }
                    return Err(anyhow::anyhow!(
                        "{} invalid chord note(s); nothing was drawn",
                        problems.len()
                    ));
                }
            };
            for c in &chords {
                neck.add_chord(c.triples())
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            match format {
                Format::Text => println!("{}", neck),
                Format::Json => {
                    println!("{}", serde_json::to_string(&NeckView::from(&neck))?)
                }
            }
        }
        Commands::Interactive { frets } => {
            let mut neck = Neck::new(frets).map_err(|e| anyhow::anyhow!(e))?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let applied = cli::run_prompt(&mut neck, stdin.lock(), &mut stdout)?;
            log::info!("session ended after {} chord(s)", applied);
        }
    }
    Ok(())
}
