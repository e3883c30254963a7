//! Fixed choice lists offered by the venue and artist forms
//!
//! Both lists are `(code, label)` pairs. The code is what gets submitted and
//! stored; the label is what the form shows.

/// US states plus the District of Columbia
pub const STATES: &[(&str, &str)] = &[
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// Genres a venue or artist can be tagged with
pub const GENRES: &[(&str, &str)] = &[
    ("Alternative", "Alternative"),
    ("Blues", "Blues"),
    ("Classical", "Classical"),
    ("Country", "Country"),
    ("Electronic", "Electronic"),
    ("Folk", "Folk"),
    ("Funk", "Funk"),
    ("Heavy Metal", "Heavy Metal"),
    ("Hip-Hop", "Hip-Hop"),
    ("Instrumental", "Instrumental"),
    ("Jazz", "Jazz"),
    ("Musical Theatre", "Musical Theatre"),
    ("Pop", "Pop"),
    ("Punk", "Punk"),
    ("R&B", "R&B"),
    ("Reggae", "Reggae"),
    ("Rock n Roll", "Rock n Roll"),
    ("Soul", "Soul"),
    ("Other", "Other"),
];

/// Whether `code` is one of the accepted state codes (case-sensitive)
pub fn is_state(code: &str) -> bool {
    STATES.iter().any(|(c, _)| *c == code)
}

/// Whether `code` is one of the accepted genres (case-sensitive)
pub fn is_genre(code: &str) -> bool {
    GENRES.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_state_list_has_fifty_states_and_dc() {
        assert_eq!(STATES.len(), 51);
        assert!(is_state("DC"));
        assert!(is_state("TX"));
    }

    #[test]
    fn test_genre_list_has_eighteen_genres_and_other() {
        assert_eq!(GENRES.len(), 19);
        assert_eq!(GENRES.last().map(|(c, _)| *c), Some("Other"));
    }

    #[test]
    fn test_codes_are_unique() {
        let states: HashSet<_> = STATES.iter().map(|(c, _)| c).collect();
        assert_eq!(states.len(), STATES.len());
        let genres: HashSet<_> = GENRES.iter().map(|(c, _)| c).collect();
        assert_eq!(genres.len(), GENRES.len());
    }

    #[test]
    fn test_membership_is_exact() {
        assert!(!is_state("tx"));
        assert!(!is_state("XX"));
        assert!(!is_state(""));
        assert!(is_genre("Rock n Roll"));
        assert!(!is_genre("rock n roll"));
        assert!(!is_genre("Polka"));
    }
}
