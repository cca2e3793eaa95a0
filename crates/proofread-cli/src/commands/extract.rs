//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;

/// Execute the extract command.
///
/// Prints the extracted text exactly as the checker would receive it.
pub async fn execute_extract(args: ExtractArgs) -> Result<()> {
    let text = proofread_document::extract(&args.file)?;
    print!("{}", text);
    Ok(())
}
