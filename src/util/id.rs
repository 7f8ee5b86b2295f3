use rand::Rng;

/// Prefix for moving-quote submissions.
pub const QUOTE_PREFIX: &str = "QT";
/// Prefix for contact-form submissions.
pub const CONTACT_PREFIX: &str = "CT";

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a tracking id of the form `<PREFIX>-<epoch-millis>-<random>`.
/// Uniqueness is probabilistic only; the repository treats a collision as
/// a conflict.
pub fn submission_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}-{}", prefix, millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(id: &str, prefix: &str) {
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3, "unexpected shape: {}", id);
        assert_eq!(parts[0], prefix);
        assert!(parts[1].parse::<i64>().is_ok(), "timestamp part: {}", parts[1]);
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn test_quote_id_shape() {
        assert_well_formed(&submission_id(QUOTE_PREFIX), "QT");
    }

    #[test]
    fn test_contact_id_shape() {
        assert_well_formed(&submission_id(CONTACT_PREFIX), "CT");
    }

    #[test]
    fn test_ids_are_never_empty_and_rarely_collide() {
        let ids: Vec<String> = (0..200).map(|_| submission_id(QUOTE_PREFIX)).collect();
        assert!(ids.iter().all(|id| !id.is_empty()));
        let unique: std::collections::HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
