//! Cross-Job Aggregation
//!
//! Folds the resource lists of many jobs into one list of running
//! totals, keyed by resource name.

use std::collections::HashMap;

use log::debug;

use super::model::{Resource, ResourceList};

/// Sums usage, requested and allocated amounts per resource name across jobs.
///
/// Produces exactly one record per distinct name, in first-seen order
/// (scanning jobs in input order and records in their own order). Each
/// total is the sum over every job reporting that resource; jobs that
/// do not report it simply contribute nothing. The output records are
/// unclassified; callers that want per-threshold judgments classify
/// the totals as a separate explicit step.
///
/// Single pass over the input, O(total record count).
pub fn sum_job_resources(job_resources: &[ResourceList]) -> ResourceList {
    let mut totals: ResourceList = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for resources in job_resources {
        for resource in resources {
            match index_by_name.get(&resource.name) {
                Some(&index) => {
                    let total = &mut totals[index];
                    total.usage += resource.usage;
                    total.requested += resource.requested;
                    total.allocated += resource.allocated;
                }
                None => {
                    index_by_name.insert(resource.name.clone(), totals.len());
                    totals.push(Resource::new(
                        resource.name.clone(),
                        resource.usage,
                        resource.requested,
                        resource.allocated,
                    ));
                }
            }
        }
    }

    debug!(
        "Summed {} job(s) into {} distinct resource(s)",
        job_resources.len(),
        totals.len()
    );
    totals
}
