//! Job codes and the job groups that own them
//!
//! Each group carries its member list as data, so looking up a job's group is
//! a scan over the groups instead of a hand-maintained `match`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Job {
    // Service
    ServiceTm,
    ServiceCrew,
    ServiceSs,

    // Management support
    ManagementSupportHr,
    ManagementSupportFa,
    ManagementSupportPs,

    // Production management
    ProductionManagementPm,
    ProductionManagementQm,
    ProductionManagementFm,
}

impl Job {
    pub const ALL: [Job; 9] = [
        Job::ServiceTm,
        Job::ServiceCrew,
        Job::ServiceSs,
        Job::ManagementSupportHr,
        Job::ManagementSupportFa,
        Job::ManagementSupportPs,
        Job::ProductionManagementPm,
        Job::ProductionManagementQm,
        Job::ProductionManagementFm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Job::ServiceTm => "Online service",
            Job::ServiceCrew => "Special service",
            Job::ServiceSs => "In-person service",
            Job::ManagementSupportHr => "HR / General affairs",
            Job::ManagementSupportFa => "Finance / Accounting",
            Job::ManagementSupportPs => "Planning / Strategy",
            Job::ProductionManagementPm => "Purchasing / Procurement",
            Job::ProductionManagementQm => "Quality management",
            Job::ProductionManagementFm => "Distribution management",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Job::ServiceTm => "SERVICE_TM",
            Job::ServiceCrew => "SERVICE_CREW",
            Job::ServiceSs => "SERVICE_SS",
            Job::ManagementSupportHr => "MANAGEMENT_SUPPORT_HR",
            Job::ManagementSupportFa => "MANAGEMENT_SUPPORT_FA",
            Job::ManagementSupportPs => "MANAGEMENT_SUPPORT_PS",
            Job::ProductionManagementPm => "PRODUCTION_MANAGEMENT_PM",
            Job::ProductionManagementQm => "PRODUCTION_MANAGEMENT_QM",
            Job::ProductionManagementFm => "PRODUCTION_MANAGEMENT_FM",
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobGroup {
    Service,
    ManagementSupport,
    ProductionManagement,
    Empty,
}

impl JobGroup {
    pub const ALL: [JobGroup; 4] = [
        JobGroup::Service,
        JobGroup::ManagementSupport,
        JobGroup::ProductionManagement,
        JobGroup::Empty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobGroup::Service => "Service",
            JobGroup::ManagementSupport => "Management support",
            JobGroup::ProductionManagement => "Production management",
            JobGroup::Empty => "None",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            JobGroup::Service => "SERVICE",
            JobGroup::ManagementSupport => "MANAGEMENT_SUPPORT",
            JobGroup::ProductionManagement => "PRODUCTION_MANAGEMENT",
            JobGroup::Empty => "EMPTY",
        }
    }

    pub fn jobs(self) -> &'static [Job] {
        match self {
            JobGroup::Service => &[Job::ServiceTm, Job::ServiceCrew, Job::ServiceSs],
            JobGroup::ManagementSupport => &[
                Job::ManagementSupportHr,
                Job::ManagementSupportFa,
                Job::ManagementSupportPs,
            ],
            JobGroup::ProductionManagement => &[
                Job::ProductionManagementPm,
                Job::ProductionManagementQm,
                Job::ProductionManagementFm,
            ],
            JobGroup::Empty => &[],
        }
    }

    pub fn has_job_code(self, job: Job) -> bool {
        self.jobs().contains(&job)
    }

    /// The group that owns `job`, or `Empty` when no group does.
    pub fn find_by_job(job: Job) -> JobGroup {
        Self::ALL
            .into_iter()
            .find(|group| group.has_job_code(job))
            .unwrap_or(JobGroup::Empty)
    }
}

impl fmt::Display for JobGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Group code -> member jobs, for every group including `EMPTY`.
pub fn job_groups_by_name() -> BTreeMap<&'static str, Vec<Job>> {
    JobGroup::ALL
        .into_iter()
        .map(|group| (group.code(), group.jobs().to_vec()))
        .collect()
}
