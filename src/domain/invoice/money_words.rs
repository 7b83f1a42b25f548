//! Hungarian cardinal numbers for the "amount in words" line of an invoice.

const ONES: [&str; 10] = [
  "", "egy", "kettő", "három", "négy", "öt", "hat", "hét", "nyolc", "kilenc",
];

const TEENS: [&str; 10] = [
  "tíz",
  "tizenegy",
  "tizenkettő",
  "tizenhárom",
  "tizennégy",
  "tizenöt",
  "tizenhat",
  "tizenhét",
  "tizennyolc",
  "tizenkilenc",
];

// Indexed by the tens digit; 1 and 2 are handled separately.
const TENS: [&str; 10] = [
  "", "", "", "harminc", "negyven", "ötven", "hatvan", "hetven", "nyolcvan", "kilencven",
];

// Units, thousands, millions, billions
const TIERS: [&str; 4] = ["", "ezer", "millió", "milliárd"];

const BILLION: u64 = 1_000_000_000;

/// Spells out `value` as a Hungarian cardinal number.
///
/// Three-digit groups are rendered highest first and joined with a hyphen;
/// zero groups are left out entirely. Values of a trillion or more keep the
/// billions tier open-ended (`1000 milliárd` is spelled "ezermilliárd").
pub fn hungarian_cardinal(value: u64) -> String {
  if value == 0 {
    return "nulla".to_string();
  }

  let mut groups = Vec::with_capacity(TIERS.len());
  let billions = value / BILLION;
  if billions > 0 {
    let head = if billions >= 1000 {
      hungarian_cardinal(billions).replace('-', "")
    } else {
      render_group(billions as u32)
    };
    groups.push(format!("{}{}", head, TIERS[3]));
  }

  let mut rest = value % BILLION;
  for tier in (0..3).rev() {
    let divisor = 1000u64.pow(tier as u32);
    let group = (rest / divisor) as u32;
    rest %= divisor;

    if group == 0 {
      continue;
    }
    if tier == 1 && group == 1 {
      groups.push(TIERS[1].to_string());
      continue;
    }
    groups.push(format!("{}{}", render_group(group), TIERS[tier]));
  }

  groups.join("-")
}

/// Formats a rounded forint amount for the invoice document.
pub fn amount_in_words(forints: u64) -> String {
  format!("{} Ft", hungarian_cardinal(forints))
}

fn render_group(group: u32) -> String {
  debug_assert!(group < 1000);

  let hundreds = (group / 100) as usize;
  let tens = ((group % 100) / 10) as usize;
  let ones = (group % 10) as usize;

  let mut words = String::new();
  match hundreds {
    0 => {}
    1 => words.push_str("száz"),
    h => {
      words.push_str(ONES[h]);
      words.push_str("száz");
    }
  }

  match tens {
    0 => words.push_str(ONES[ones]),
    1 => words.push_str(TEENS[ones]),
    2 if ones == 0 => words.push_str("húsz"),
    2 => {
      words.push_str("huszon");
      words.push_str(ONES[ones]);
    }
    t => {
      words.push_str(TENS[t]);
      words.push_str(ONES[ones]);
    }
  }

  words
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zero_and_small_numbers() {
    assert_eq!(hungarian_cardinal(0), "nulla");
    assert_eq!(hungarian_cardinal(1), "egy");
    assert_eq!(hungarian_cardinal(2), "kettő");
    assert_eq!(hungarian_cardinal(10), "tíz");
    assert_eq!(hungarian_cardinal(15), "tizenöt");
    assert_eq!(hungarian_cardinal(20), "húsz");
    assert_eq!(hungarian_cardinal(25), "huszonöt");
    assert_eq!(hungarian_cardinal(30), "harminc");
    assert_eq!(hungarian_cardinal(99), "kilencvenkilenc");
  }

  #[test]
  fn test_hundreds() {
    assert_eq!(hungarian_cardinal(100), "száz");
    assert_eq!(hungarian_cardinal(101), "százegy");
    assert_eq!(hungarian_cardinal(250), "kettőszázötven");
    assert_eq!(hungarian_cardinal(999), "kilencszázkilencvenkilenc");
  }

  #[test]
  fn test_thousands() {
    assert_eq!(hungarian_cardinal(1000), "ezer");
    assert_eq!(hungarian_cardinal(1001), "ezer-egy");
    assert_eq!(hungarian_cardinal(2025), "kettőezer-huszonöt");
    assert_eq!(hungarian_cardinal(12700), "tizenkettőezer-hétszáz");
    assert_eq!(hungarian_cardinal(21000), "huszonegyezer");
  }

  #[test]
  fn test_zero_groups_are_skipped() {
    assert_eq!(hungarian_cardinal(1_000_000), "egymillió");
    assert_eq!(hungarian_cardinal(1_000_005), "egymillió-öt");
    assert_eq!(hungarian_cardinal(2_001_000), "kettőmillió-ezer");
    assert_eq!(
      hungarian_cardinal(3_000_000_042),
      "hárommilliárd-negyvenkettő"
    );
  }

  #[test]
  fn test_largest_supported_value() {
    assert_eq!(
      hungarian_cardinal(999_999_999_999),
      "kilencszázkilencvenkilencmilliárd-kilencszázkilencvenkilencmillió-kilencszázkilencvenkilencezer-kilencszázkilencvenkilenc"
    );
  }

  #[test]
  fn test_amount_in_words() {
    assert_eq!(amount_in_words(12700), "tizenkettőezer-hétszáz Ft");
    assert_eq!(amount_in_words(0), "nulla Ft");
  }
}
