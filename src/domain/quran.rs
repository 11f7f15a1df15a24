//! Static surah metadata (Hafs/Uthmani ayah counts).

/// One surah of the Quran
pub struct Surah {
  pub number: u16,
  pub name: &'static str,
  pub ayah_count: u16,
}

pub const SURAH_COUNT: u16 = 114;

const fn surah(number: u16, name: &'static str, ayah_count: u16) -> Surah {
  Surah { number, name, ayah_count }
}

pub const SURAHS: [Surah; 114] = [
  surah(1, "Al-Fatihah", 7),
  surah(2, "Al-Baqarah", 286),
  surah(3, "Aal Imran", 200),
  surah(4, "An-Nisa", 176),
  surah(5, "Al-Ma'idah", 120),
  surah(6, "Al-An'am", 165),
  surah(7, "Al-A'raf", 206),
  surah(8, "Al-Anfal", 75),
  surah(9, "At-Tawbah", 129),
  surah(10, "Yunus", 109),
  surah(11, "Hud", 123),
  surah(12, "Yusuf", 111),
  surah(13, "Ar-Ra'd", 43),
  surah(14, "Ibrahim", 52),
  surah(15, "Al-Hijr", 99),
  surah(16, "An-Nahl", 128),
  surah(17, "Al-Isra", 111),
  surah(18, "Al-Kahf", 110),
  surah(19, "Maryam", 98),
  surah(20, "Ta-Ha", 135),
  surah(21, "Al-Anbya", 112),
  surah(22, "Al-Hajj", 78),
  surah(23, "Al-Mu'minun", 118),
  surah(24, "An-Nur", 64),
  surah(25, "Al-Furqan", 77),
  surah(26, "Ash-Shu'ara", 227),
  surah(27, "An-Naml", 93),
  surah(28, "Al-Qasas", 88),
  surah(29, "Al-Ankabut", 69),
  surah(30, "Ar-Rum", 60),
  surah(31, "Luqman", 34),
  surah(32, "As-Sajdah", 30),
  surah(33, "Al-Ahzab", 73),
  surah(34, "Saba", 54),
  surah(35, "Fatir", 45),
  surah(36, "Ya-Sin", 83),
  surah(37, "As-Saffat", 182),
  surah(38, "Sad", 88),
  surah(39, "Az-Zumar", 75),
  surah(40, "Ghafir", 85),
  surah(41, "Fussilat", 54),
  surah(42, "Ash-Shura", 53),
  surah(43, "Az-Zukhruf", 89),
  surah(44, "Ad-Dukhan", 59),
  surah(45, "Al-Jathiyah", 37),
  surah(46, "Al-Ahqaf", 35),
  surah(47, "Muhammad", 38),
  surah(48, "Al-Fath", 29),
  surah(49, "Al-Hujurat", 18),
  surah(50, "Qaf", 45),
  surah(51, "Adh-Dhariyat", 60),
  surah(52, "At-Tur", 49),
  surah(53, "An-Najm", 62),
  surah(54, "Al-Qamar", 55),
  surah(55, "Ar-Rahman", 78),
  surah(56, "Al-Waqi'ah", 96),
  surah(57, "Al-Hadid", 29),
  surah(58, "Al-Mujadila", 22),
  surah(59, "Al-Hashr", 24),
  surah(60, "Al-Mumtahanah", 13),
  surah(61, "As-Saff", 14),
  surah(62, "Al-Jumu'ah", 11),
  surah(63, "Al-Munafiqun", 11),
  surah(64, "At-Taghabun", 18),
  surah(65, "At-Talaq", 12),
  surah(66, "At-Tahrim", 12),
  surah(67, "Al-Mulk", 30),
  surah(68, "Al-Qalam", 52),
  surah(69, "Al-Haqqah", 52),
  surah(70, "Al-Ma'arij", 44),
  surah(71, "Nuh", 28),
  surah(72, "Al-Jinn", 28),
  surah(73, "Al-Muzzammil", 20),
  surah(74, "Al-Muddaththir", 56),
  surah(75, "Al-Qiyamah", 40),
  surah(76, "Al-Insan", 31),
  surah(77, "Al-Mursalat", 50),
  surah(78, "An-Naba", 40),
  surah(79, "An-Nazi'at", 46),
  surah(80, "Abasa", 42),
  surah(81, "At-Takwir", 29),
  surah(82, "Al-Infitar", 19),
  surah(83, "Al-Mutaffifin", 36),
  surah(84, "Al-Inshiqaq", 25),
  surah(85, "Al-Buruj", 22),
  surah(86, "At-Tariq", 17),
  surah(87, "Al-A'la", 19),
  surah(88, "Al-Ghashiyah", 26),
  surah(89, "Al-Fajr", 30),
  surah(90, "Al-Balad", 20),
  surah(91, "Ash-Shams", 15),
  surah(92, "Al-Layl", 21),
  surah(93, "Ad-Duha", 11),
  surah(94, "Ash-Sharh", 8),
  surah(95, "At-Tin", 8),
  surah(96, "Al-Alaq", 19),
  surah(97, "Al-Qadr", 5),
  surah(98, "Al-Bayyinah", 8),
  surah(99, "Az-Zalzalah", 8),
  surah(100, "Al-Adiyat", 11),
  surah(101, "Al-Qari'ah", 11),
  surah(102, "At-Takathur", 8),
  surah(103, "Al-Asr", 3),
  surah(104, "Al-Humazah", 9),
  surah(105, "Al-Fil", 5),
  surah(106, "Quraysh", 4),
  surah(107, "Al-Ma'un", 7),
  surah(108, "Al-Kawthar", 3),
  surah(109, "Al-Kafirun", 6),
  surah(110, "An-Nasr", 3),
  surah(111, "Al-Masad", 5),
  surah(112, "Al-Ikhlas", 4),
  surah(113, "Al-Falaq", 5),
  surah(114, "An-Nas", 6),
];

/// Get surah metadata by number (1-114)
pub fn get_surah(number: u16) -> Option<&'static Surah> {
  if number == 0 || number > SURAH_COUNT {
    return None;
  }
  SURAHS.get(number as usize - 1)
}

/// Total ayah count across the whole mushaf
pub fn total_ayah_count() -> i64 {
  SURAHS.iter().map(|s| s.ayah_count as i64).sum()
}
