//! Interactive menu loop

use crate::error::CliResult;
use crate::output::print_info;
use crate::prompt;
use crate::session::{MenuChoice, Session};
use geogrant_registry::DistributorRequest;

/// Run the menu until the user exits
pub fn execute(session: &mut Session) -> CliResult<()> {
    loop {
        match prompt::menu()? {
            MenuChoice::CreateDistributor => {
                let name = prompt::text("Distributor name")?;
                let request = read_regions(DistributorRequest::root(name))?;
                session.create(request);
            }
            MenuChoice::CreateSubDistributor => {
                let name = prompt::text("Sub-distributor name")?;
                let parent = prompt::text("Parent distributor name")?;
                let request = read_regions(DistributorRequest::sub(name, parent))?;
                session.create(request);
            }
            MenuChoice::CheckPermission => {
                let name = prompt::text("Distributor name")?;
                let regions = prompt::text("Regions to check (comma-separated)")?;
                session.check(&name, &regions)?;
            }
            MenuChoice::ViewDistributors => session.view()?,
            MenuChoice::Exit => {
                print_info(&format!(
                    "Exiting with {} distributor(s)",
                    session.registry().len()
                ));
                return Ok(());
            }
        }
    }
}

fn read_regions(request: DistributorRequest) -> CliResult<DistributorRequest> {
    let include = prompt::text("Include regions (comma-separated)")?;
    let exclude = prompt::text("Exclude regions (comma-separated)")?;
    Ok(request.with_include(&include).with_exclude(&exclude))
}
