use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ViewData;

pub fn handle(cmd: &Commands, core: &Core) -> AppResult<()> {
    if let Commands::Show { dataset, limit } = cmd {
        let records = core.records(dataset)?;
        super::print_view(dataset, &ViewData::Records(records), *limit);
    }
    Ok(())
}
