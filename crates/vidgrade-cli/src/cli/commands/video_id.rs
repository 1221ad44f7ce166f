use vidgrade_core::extract_video_id;

use crate::cli::args::VideoIdArgs;
use crate::exit_codes;

pub fn run(args: &VideoIdArgs) -> i32 {
    match extract_video_id(&args.url) {
        Some(id) => {
            println!("{}", id);
            exit_codes::SUCCESS
        }
        None => {
            eprintln!("error: not a recognized video URL: {}", args.url);
            exit_codes::INVALID_VIDEO_REFERENCE
        }
    }
}
