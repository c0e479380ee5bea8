//! 문자 분류 및 숫자 문자열 유틸리티

/// 한글 완성형 음절 범위 (가 ~ 힣)
const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(ch: char) -> bool {
    (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&(ch as u32))
}

/// 영문 또는 완성형 한글 글자인지 확인
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || is_hangul_syllable(ch)
}

/// 정수 자릿수 문자열에 천 단위 쉼표 삽입
///
/// 입력은 부호 없는 ASCII 숫자열이어야 합니다. ("1234567" -> "1,234,567")
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 소수점 이하 끝자리 0과 남는 소수점을 제거 ("1.50" -> "1.5", "10.0" -> "10")
pub fn trim_fraction(formatted: &str) -> &str {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hangul_syllable() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(is_hangul_syllable('강'));

        // 낱자모는 완성형이 아님
        assert!(!is_hangul_syllable('ㄱ'));
        assert!(!is_hangul_syllable('ㅏ'));
        assert!(!is_hangul_syllable('a'));
        assert!(!is_hangul_syllable('1'));
    }

    #[test]
    fn test_is_letter() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('한'));
        assert!(!is_letter('_'));
        assert!(!is_letter('7'));
        assert!(!is_letter('é'));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("15000"), "15,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands(""), "");
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction("1.5"), "1.5");
        assert_eq!(trim_fraction("1.50"), "1.5");
        assert_eq!(trim_fraction("10.0"), "10");
        assert_eq!(trim_fraction("100"), "100");
        assert_eq!(trim_fraction("0.00"), "0");
    }
}
