use clap::{Parser, Subcommand};

use syr_cli::commands::{config_ops, corpus_ops, filter_ops};
use syr_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "syrtool", about = "Syriac corpus preparation and word-list analysis")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom transliteration TOML (see `translit-export`)
    #[arg(long, global = true)]
    translit_table: Option<String>,
    /// Log every pipeline step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Remove line breaks and punctuation
    Normalize {
        /// Source document (UTF-8)
        input: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Normalize, then transliterate to Latin characters
    Translit {
        /// Source document (UTF-8)
        input: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Character inventory
    Chars {
        /// Source document (UTF-8)
        input: String,
        /// Count the transliterated text instead
        #[arg(long)]
        latin: bool,
        /// Sort mode: alphabetic (alefba) or frequency (freq)
        #[arg(long)]
        sort: Option<String>,
        /// Write `char,count` lines to this file
        #[arg(short, long)]
        output: Option<String>,
        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Word frequency list
    Words {
        /// Source document (UTF-8)
        input: String,
        /// Count the transliterated text instead
        #[arg(long)]
        latin: bool,
        /// Sort mode: alphabetic (alefba) or frequency (freq)
        #[arg(long)]
        sort: Option<String>,
        /// Write `word,count` lines to this file
        #[arg(short, long)]
        output: Option<String>,
        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Find words by length and/or contained pattern
    Search {
        /// Source document (UTF-8)
        input: String,
        /// Search the transliterated text instead
        #[arg(long)]
        latin: bool,
        /// Exact length in characters (diacritics count)
        #[arg(long)]
        length: Option<usize>,
        /// Substring the word must contain
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Split the word list into vocalized and unvocalized words
    Vocalized {
        /// Source document (UTF-8)
        input: String,
        /// Sort mode for the exported lists
        #[arg(long)]
        sort: Option<String>,
        /// Write vocalized `word,count` lines to this file
        #[arg(long)]
        vocalized_out: Option<String>,
        /// Write unvocalized `word,count` lines to this file
        #[arg(long)]
        unvocalized_out: Option<String>,
    },
    /// Words carrying the syame plural marker
    Syame {
        /// Source document (UTF-8)
        input: String,
        /// Sort mode: alphabetic (alefba) or frequency (freq)
        #[arg(long)]
        sort: Option<String>,
        /// Write `word,count` lines to this file
        #[arg(short, long)]
        output: Option<String>,
        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Words that may start with a proclitic particle
    Particles {
        /// Source document (UTF-8)
        input: String,
        /// Only this prefix (default: summary of all configured prefixes)
        #[arg(long)]
        prefix: Option<String>,
        /// Sort mode for the word list of a single prefix
        #[arg(long, requires = "prefix")]
        sort: Option<String>,
        /// Write lines to this file
        #[arg(short, long)]
        output: Option<String>,
        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Token, type and character statistics
    Stats {
        /// Source document (UTF-8)
        input: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default transliteration table as TOML
    TranslitExport,
    /// Validate a custom transliteration TOML file
    TranslitValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    config_ops::init_custom(cli.settings.as_deref(), cli.translit_table.as_deref());

    match cli.command {
        Command::Normalize { input, output } => corpus_ops::normalize(&input, output.as_deref()),
        Command::Translit { input, output } => corpus_ops::translit(&input, output.as_deref()),
        Command::Chars {
            input,
            latin,
            sort,
            output,
            limit,
        } => corpus_ops::chars(&input, latin, sort.as_deref(), output.as_deref(), limit),
        Command::Words {
            input,
            latin,
            sort,
            output,
            limit,
        } => corpus_ops::words(&input, latin, sort.as_deref(), output.as_deref(), limit),
        Command::Search {
            input,
            latin,
            length,
            pattern,
        } => filter_ops::search(&input, latin, length, pattern.as_deref()),
        Command::Vocalized {
            input,
            sort,
            vocalized_out,
            unvocalized_out,
        } => filter_ops::vocalized(
            &input,
            sort.as_deref(),
            vocalized_out.as_deref(),
            unvocalized_out.as_deref(),
        ),
        Command::Syame {
            input,
            sort,
            output,
            limit,
        } => filter_ops::syame(&input, sort.as_deref(), output.as_deref(), limit),
        Command::Particles {
            input,
            prefix,
            sort,
            output,
            limit,
        } => filter_ops::particles(
            &input,
            prefix.as_deref(),
            sort.as_deref(),
            output.as_deref(),
            limit,
        ),
        Command::Stats { input } => corpus_ops::stats(&input),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::TranslitExport => config_ops::translit_export(),
        Command::TranslitValidate { file } => config_ops::translit_validate(&file),
    }
}
