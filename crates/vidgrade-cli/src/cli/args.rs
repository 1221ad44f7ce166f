use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "vidgrade",
    version,
    about = "Rubric-style assessments of educational videos via generative providers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assess a video for a subject and print the record
    Analyze(AnalyzeArgs),
    /// Print the video id a URL resolves to
    VideoId(VideoIdArgs),
    /// Serve POST /analyze over HTTP
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Video URL (watch, short-link, or embed form)
    #[arg(short, long)]
    pub url: String,

    /// Subject or topic the video teaches
    #[arg(short, long, default_value = "")]
    pub subject: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct VideoIdArgs {
    pub url: String,
}

#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_with_defaults() {
        let cli = Cli::try_parse_from(["vidgrade", "analyze", "--url", "https://youtu.be/dQw4w9WgXcQ"])
            .unwrap();
        match cli.cmd {
            Command::Analyze(args) => {
                assert_eq!(args.subject, "");
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn parses_serve_port() {
        let cli = Cli::try_parse_from(["vidgrade", "serve", "--port", "8080"]).unwrap();
        match cli.cmd {
            Command::Serve(args) => {
                assert_eq!(args.port, 8080);
                assert_eq!(args.bind, "0.0.0.0");
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn analyze_requires_url() {
        assert!(Cli::try_parse_from(["vidgrade", "analyze", "--subject", "Physics"]).is_err());
    }
}
