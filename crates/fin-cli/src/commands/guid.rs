use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct GuidResponse {
    guid: String,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &GuidResponse {
            guid: fin_core::ids::generate_guid(),
        },
        flags.format,
    )
}
