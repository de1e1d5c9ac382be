//! Patients command: search and page through the patient roster.

use anyhow::Result;
use tracing::{info, info_span};

use audiosight_listing::{PageRequest, paginate};
use audiosight_patients::PatientDirectory;

use crate::cli::PatientsArgs;
use crate::config::DashboardConfig;

/// Run the patient listing.
pub fn run(args: PatientsArgs) -> Result<()> {
    let _cmd = info_span!("patients").entered();
    let config = DashboardConfig::load(&args.config)?;
    let directory = PatientDirectory::seed();

    let page_size = args.page_size.unwrap_or(config.listing.items_per_page);
    let request = PageRequest::new(page_size)
        .with_query(args.query.unwrap_or_default())
        .with_page(args.page);
    let result = paginate(directory.patients(), &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(result.items())?);
        return Ok(());
    }

    info!(
        total = result.total_items(),
        page = result.current_page(),
        "rendering patient table"
    );

    println!("Patient Details");
    println!();
    println!(
        "{:>4}  {:<3} {:<20} {:>3}  {:<7} {:<6} {:<16} {}",
        "ID", "", "PATIENT NAME", "AGE", "GENDER", "BLOOD", "PHONE NUMBER", "EMAIL ID"
    );
    for patient in result.items() {
        println!(
            "{:>4}  {:<3} {:<20} {:>3}  {:<7} {:<6} {:<16} {}",
            patient.id,
            patient.avatar,
            patient.name,
            patient.age,
            patient.gender.to_string(),
            patient.blood_group.to_string(),
            patient.phone,
            patient.email
        );
    }
    println!();
    println!(
        "Page {} of {} ({} patients)",
        result.current_page(),
        result.total_pages().max(1),
        result.total_items()
    );
    Ok(())
}
