//! Reproducible synthetic directories for demos and benchmarking.
//!
//! Everything is drawn from a seeded `StdRng`, so the same seed always
//! yields the same snapshot.

use directory::{MemberId, MemberRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: [&str; 12] = [
    "Alice", "Bruno", "Chidi", "Dana", "Eve", "Farah", "Gus", "Hana", "Ivan", "Jia", "Kofi", "Lena",
];

const LAST_NAMES: [&str; 8] = [
    "Chen", "Diaz", "Okafor", "Kim", "Novak", "Haddad", "Berg", "Sato",
];

const SKILLS: [&str; 16] = [
    "React",
    "Web Development",
    "Mobile Development",
    "Game Development",
    "UI Design",
    "Graphic Design",
    "Brand Marketing",
    "Content Marketing",
    "Business Strategy",
    "Business Analytics",
    "Creative Writing",
    "Photography",
    "Public Speaking",
    "Python",
    "Rust",
    "Video Editing",
];

/// Generate `count` members from `seed`.
pub fn generate_members(count: usize, seed: u64) -> Vec<MemberRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| generate_member(&mut rng, i)).collect()
}

fn generate_member(rng: &mut StdRng, i: usize) -> MemberRecord {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    let name = format!("{first} {last}");

    // Ratings in half steps, 0.0 ..= 5.0
    let rating = rng.random_range(0..=10u8) as f64 / 2.0;

    MemberRecord {
        id: MemberId::from(i as u64 + 1),
        username: format!("{}{}", first.to_lowercase(), i + 1),
        avatar_initial: first[..1].to_string(),
        name,
        is_online: rng.random_bool(0.4),
        rating,
        skills_offered: pick_skills(rng, 0..=3),
        skills_wanted: pick_skills(rng, 0..=2),
    }
}

fn pick_skills(rng: &mut StdRng, how_many: std::ops::RangeInclusive<usize>) -> Vec<String> {
    let n = rng.random_range(how_many);
    let mut skills: Vec<String> = Vec::with_capacity(n);
    while skills.len() < n {
        let skill = SKILLS[rng.random_range(0..SKILLS.len())];
        if !skills.iter().any(|s| s == skill) {
            skills.push(skill.to_string());
        }
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_directory() {
        assert_eq!(generate_members(50, 7), generate_members(50, 7));
    }

    #[test]
    fn test_generated_members_respect_invariants() {
        for m in generate_members(200, 42) {
            assert!((0.0..=5.0).contains(&m.rating));
            assert!(!m.name.is_empty());
            assert!(m.skills_offered.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let members = generate_members(100, 1);
        let ids: std::collections::HashSet<_> = members.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }
}
