//! Optional filter on member presence.
//!
//! Members only report an online flag, so this filter can tell
//! "available" apart from everything else and nothing finer.

use crate::criteria::Availability;
use crate::traits::Filter;
use directory::{DirectoryIndex, MemberRecord};

/// Filters members by the viewer's availability selection.
///
/// ## Algorithm
/// 1. `All` keeps everyone
/// 2. `Available` keeps members that are online
/// 3. `Busy` and `Offline` keep members that are not online
pub struct AvailabilityFilter {
    availability: Availability,
}

impl AvailabilityFilter {
    pub fn new(availability: Availability) -> Self {
        Self { availability }
    }

    pub fn is_vacuous(&self) -> bool {
        self.availability == Availability::All
    }
}

impl Filter for AvailabilityFilter {
    fn name(&self) -> &str {
        "AvailabilityFilter"
    }

    fn keep(&self, member: &MemberRecord, _index: &DirectoryIndex) -> bool {
        self.availability.admits(member.is_online)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{member, snapshot};

    fn online(mut m: MemberRecord) -> MemberRecord {
        m.is_online = true;
        m
    }

    fn kept(availability: Availability, index: &DirectoryIndex) -> Vec<String> {
        let filter = AvailabilityFilter::new(availability);
        index
            .members()
            .iter()
            .filter(|m| filter.keep(m, index))
            .map(|m| m.id.to_string())
            .collect()
    }

    #[test]
    fn test_availability_filter() {
        let index = snapshot(
            vec![online(member("1", "Ada", 4.0)), member("2", "Bo", 3.0), online(member("3", "Cy", 2.0))],
            None,
        );

        assert_eq!(kept(Availability::Available, &index), vec!["1", "3"]);
        assert_eq!(kept(Availability::Offline, &index), vec!["2"]);
        assert_eq!(kept(Availability::Busy, &index), vec!["2"]);
        assert_eq!(kept(Availability::All, &index).len(), 3);
    }
}
