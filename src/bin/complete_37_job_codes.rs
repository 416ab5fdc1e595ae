use colored::Colorize;
use idiom_demos::job::{job_groups_by_name, Job, JobGroup};

fn main() {
    pretty_env_logger::try_init_timed().ok();

    println!("{}", "Job groups".bold());
    match serde_json::to_string_pretty(&job_groups_by_name()) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("{}", format!("could not render job groups: {}", err).red()),
    }

    println!(
        "SERVICE has SERVICE_TM: {}",
        JobGroup::Service.has_job_code(Job::ServiceTm)
    );
    println!(
        "SERVICE has MANAGEMENT_SUPPORT_FA: {}",
        JobGroup::Service.has_job_code(Job::ManagementSupportFa)
    );

    println!();
    for job in Job::ALL {
        let group = JobGroup::find_by_job(job);
        println!(
            "  {:<26} {:<26} -> {}",
            job.to_string().cyan(),
            job.label(),
            group.label().green()
        );
    }
}
