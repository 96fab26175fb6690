use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, core: &Core) -> AppResult<()> {
    if let Commands::Export {
        view,
        dataset,
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(core, *view, dataset.as_deref(), *format, file, *force)?;
    }
    Ok(())
}
