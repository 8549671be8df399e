//! Расчёты для эффектов прокрутки: якоря с поправкой на шапку, параллакс,
//! автопрокрутка домашней страницы.
//!
//! Наблюдатели (`IntersectionObserver`) и сами прокрутки живут в `zenith-wasm`.

/// Цель клика по якорю. `#` без имени и не-якорные ссылки пропускаются.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if !href.starts_with('#') || href == "#" {
        return None;
    }
    Some(href)
}

/// Координата прокрутки к элементу так, чтобы его не закрыла фиксированная шапка.
///
/// `element_top` это `getBoundingClientRect().top`, то есть относительно окна.
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    element_top + page_y_offset - header_height
}

/// Число в начале строки, как у `parseFloat`: `"0.5px"` даёт `0.5`,
/// хвост после числа игнорируется.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }

    // экспонента берётся, только если за ней есть цифры
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    raw[..end].parse::<f64>().ok()
}

/// Скорость параллакса из `data-parallax-speed`. Пустое, нечисловое и нулевое
/// значение заменяется `default_speed`.
pub fn parallax_speed(raw: Option<&str>, default_speed: f64) -> f64 {
    raw.and_then(parse_float_prefix)
        .filter(|speed| speed.is_finite() && *speed != 0.0)
        .unwrap_or(default_speed)
}

/// Значение `transform` для элемента с параллаксом.
pub fn parallax_transform(page_y_offset: f64, speed: f64) -> String {
    format!("translateY({}px)", page_y_offset * speed)
}

/// Нужна ли автопрокрутка к приветствию на этой странице.
pub fn should_auto_scroll(pathname: &str, paths: &[String]) -> bool {
    paths.iter().any(|path| path == pathname)
}
