//! SUNAFIL fine tables. Micro and small cells are céntimos; standard cells
//! are hundredths of a UIT.

use sst_core::{Soles, UitMultiplier};

use crate::fines::{Bracket, FineRow};

const MICRO: [(&str, i64, Option<i64>, [u64; 3]); 10] = [
    ("1", 1, Some(1), [24_075, 58_850, 123_050]),
    ("2", 2, Some(2), [26_750, 74_900, 133_750]),
    ("3", 3, Some(3), [37_450, 85_600, 155_150]),
    ("4", 4, Some(4), [42_800, 96_300, 171_200]),
    ("5", 5, Some(5), [48_150, 107_000, 192_600]),
    ("6", 6, Some(6), [58_850, 133_750, 219_350]),
    ("7", 7, Some(7), [74_900, 155_150, 251_450]),
    ("8", 8, Some(8), [85_600, 181_900, 288_900]),
    ("9", 9, Some(9), [96_300, 203_300, 326_350]),
    ("10 y más", 10, None, [123_050, 240_750, 363_800]),
];

const SMALL: [(&str, i64, Option<i64>, [u64; 3]); 10] = [
    ("1 a 5", 1, Some(5), [48_150, 240_750, 444_050]),
    ("6 a 10", 6, Some(10), [74_900, 315_650, 674_200]),
    ("11 a 20", 11, Some(20), [96_300, 412_050, 882_750]),
    ("21 a 30", 21, Some(30), [123_050, 518_950, 1_144_900]),
    ("31 a 40", 31, Some(40), [171_200, 674_200, 1_481_750]),
    ("41 a 50", 41, Some(50), [240_750, 807_850, 1_791_250]),
    ("51 a 60", 51, Some(60), [326_350, 1_070_000, 2_375_400]),
    ("61 a 70", 61, Some(70), [444_050, 1_332_150, 2_963_400]),
    ("71 a 99", 71, Some(99), [540_350, 1_632_850, 3_531_000]),
    ("100 y más", 100, None, [1_203_750, 2_416_750, 6_184_050]),
];

const STANDARD: [(&str, i64, Option<i64>, [u32; 3]); 13] = [
    ("1-10", 1, Some(10), [13, 45, 94]),
    ("11-25", 11, Some(25), [38, 158, 316]),
    ("26-50", 26, Some(50), [61, 646, 1_061]),
    ("51-100", 51, Some(100), [104, 1_070, 2_122]),
    ("101-200", 101, Some(200), [158, 1_494, 3_183]),
    ("201-300", 201, Some(300), [201, 1_806, 4_244]),
    ("301-400", 301, Some(400), [244, 2_118, 5_304]),
    ("401-500", 401, Some(500), [287, 2_429, 6_364]),
    ("501-600", 501, Some(600), [329, 2_853, 7_425]),
    ("601-700", 601, Some(700), [372, 3_277, 8_485]),
    ("701-800", 701, Some(800), [415, 3_701, 9_545]),
    ("801-900", 801, Some(900), [458, 4_125, 10_605]),
    ("901-a-mas", 901, None, [502, 4_549, 11_665]),
];

fn bracket(label: &str, min: i64, max: Option<i64>) -> Bracket {
    match max {
        Some(max) => Bracket::bounded(label, min, max),
        None => Bracket::open(label, min),
    }
}

pub(crate) fn micro_table() -> Vec<FineRow<Soles>> {
    MICRO
        .iter()
        .map(|(label, min, max, cells)| {
            FineRow::new(bracket(label, *min, *max), cells.map(Soles::from_centimos))
        })
        .collect()
}

pub(crate) fn small_table() -> Vec<FineRow<Soles>> {
    SMALL
        .iter()
        .map(|(label, min, max, cells)| {
            FineRow::new(bracket(label, *min, *max), cells.map(Soles::from_centimos))
        })
        .collect()
}

pub(crate) fn standard_table() -> Vec<FineRow<UitMultiplier>> {
    STANDARD
        .iter()
        .map(|(label, min, max, cells)| {
            FineRow::new(
                bracket(label, *min, *max),
                cells.map(UitMultiplier::from_hundredths),
            )
        })
        .collect()
}
