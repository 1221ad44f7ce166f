pub mod analyze;
pub mod serve;
pub mod video_id;

use super::args::{Cli, Command};

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Analyze(args) => analyze::run(args).await,
        Command::VideoId(args) => Ok(video_id::run(&args)),
        Command::Serve(args) => serve::run(args).await,
    }
}
