//! Tabla de nombres de tecla -> código de tecla virtual
//!
//! Los nombres siguen la convención de Windows (`A`, `D5`, `NumPad5`, `F5`,
//! `PageUp`, `OemPlus`...). La búsqueda no distingue mayúsculas.

use std::borrow::Cow;

/// Primer código de las teclas de dígito de la fila superior (`D0`)
pub const VK_0: u32 = 0x30;
/// Primer código de las letras (`A`)
pub const VK_A: u32 = 0x41;
/// Primer código del teclado numérico (`NumPad0`)
pub const VK_NUMPAD0: u32 = 0x60;
/// Primer código de las teclas de función (`F1`)
pub const VK_F1: u32 = 0x70;

/// Teclas con nombre que no siguen un rango numérico
///
/// Mismos nombres que la enumeración de teclas de Windows (`Key`), con sus
/// alias. Cuando hay alias, el primero es el nombre canónico (el que usa
/// `key_name`). No hay abreviaturas propias (`Esc`, `Backspace`...).
const NAMED_KEYS: &[(&str, u32)] = &[
    ("Cancel", 0x03),
    ("Back", 0x08),
    ("Tab", 0x09),
    ("Clear", 0x0C),
    ("Enter", 0x0D),
    ("Return", 0x0D),
    ("Pause", 0x13),
    ("CapsLock", 0x14),
    ("Capital", 0x14),
    ("KanaMode", 0x15),
    ("HangulMode", 0x15),
    ("JunjaMode", 0x17),
    ("FinalMode", 0x18),
    ("HanjaMode", 0x19),
    ("KanjiMode", 0x19),
    ("Escape", 0x1B),
    ("ImeConvert", 0x1C),
    ("ImeNonConvert", 0x1D),
    ("ImeAccept", 0x1E),
    ("ImeModeChange", 0x1F),
    ("Space", 0x20),
    ("PageUp", 0x21),
    ("Prior", 0x21),
    ("PageDown", 0x22),
    ("Next", 0x22),
    ("End", 0x23),
    ("Home", 0x24),
    ("Left", 0x25),
    ("Up", 0x26),
    ("Right", 0x27),
    ("Down", 0x28),
    ("Select", 0x29),
    ("Print", 0x2A),
    ("Execute", 0x2B),
    ("PrintScreen", 0x2C),
    ("Snapshot", 0x2C),
    ("Insert", 0x2D),
    ("Delete", 0x2E),
    ("Help", 0x2F),
    ("LWin", 0x5B),
    ("RWin", 0x5C),
    ("Apps", 0x5D),
    ("Sleep", 0x5F),
    ("Multiply", 0x6A),
    ("Add", 0x6B),
    ("Separator", 0x6C),
    ("Subtract", 0x6D),
    ("Decimal", 0x6E),
    ("Divide", 0x6F),
    ("NumLock", 0x90),
    ("Scroll", 0x91),
    ("LeftShift", 0xA0),
    ("RightShift", 0xA1),
    ("LeftCtrl", 0xA2),
    ("RightCtrl", 0xA3),
    ("LeftAlt", 0xA4),
    ("RightAlt", 0xA5),
    ("BrowserBack", 0xA6),
    ("BrowserForward", 0xA7),
    ("BrowserRefresh", 0xA8),
    ("BrowserStop", 0xA9),
    ("BrowserSearch", 0xAA),
    ("BrowserFavorites", 0xAB),
    ("BrowserHome", 0xAC),
    ("VolumeMute", 0xAD),
    ("VolumeDown", 0xAE),
    ("VolumeUp", 0xAF),
    ("MediaNextTrack", 0xB0),
    ("MediaPreviousTrack", 0xB1),
    ("MediaStop", 0xB2),
    ("MediaPlayPause", 0xB3),
    ("LaunchMail", 0xB4),
    ("SelectMedia", 0xB5),
    ("LaunchApplication1", 0xB6),
    ("LaunchApplication2", 0xB7),
    ("OemSemicolon", 0xBA),
    ("Oem1", 0xBA),
    ("OemPlus", 0xBB),
    ("OemComma", 0xBC),
    ("OemMinus", 0xBD),
    ("OemPeriod", 0xBE),
    ("OemQuestion", 0xBF),
    ("Oem2", 0xBF),
    ("OemTilde", 0xC0),
    ("Oem3", 0xC0),
    ("AbntC1", 0xC1),
    ("AbntC2", 0xC2),
    ("OemOpenBrackets", 0xDB),
    ("Oem4", 0xDB),
    ("OemPipe", 0xDC),
    ("Oem5", 0xDC),
    ("OemCloseBrackets", 0xDD),
    ("Oem6", 0xDD),
    ("OemQuotes", 0xDE),
    ("Oem7", 0xDE),
    ("Oem8", 0xDF),
    ("OemBackslash", 0xE2),
    ("Oem102", 0xE2),
    ("ImeProcessed", 0xE5),
    ("OemAttn", 0xF0),
    ("DbeAlphanumeric", 0xF0),
    ("OemFinish", 0xF1),
    ("DbeKatakana", 0xF1),
    ("OemCopy", 0xF2),
    ("DbeHiragana", 0xF2),
    ("OemAuto", 0xF3),
    ("DbeSbcsChar", 0xF3),
    ("OemEnlw", 0xF4),
    ("DbeDbcsChar", 0xF4),
    ("OemBackTab", 0xF5),
    ("DbeRoman", 0xF5),
    ("Attn", 0xF6),
    ("DbeNoRoman", 0xF6),
    ("CrSel", 0xF7),
    ("DbeEnterWordRegisterMode", 0xF7),
    ("ExSel", 0xF8),
    ("DbeEnterImeConfigureMode", 0xF8),
    ("EraseEof", 0xF9),
    ("DbeFlushString", 0xF9),
    ("Play", 0xFA),
    ("DbeCodeInput", 0xFA),
    ("Zoom", 0xFB),
    ("DbeNoCodeInput", 0xFB),
    ("NoName", 0xFC),
    ("DbeDetermineString", 0xFC),
    ("Pa1", 0xFD),
    ("DbeEnterDialogConversionMode", 0xFD),
    ("OemClear", 0xFE),
];

/// Resuelve un nombre de tecla a su código virtual
///
/// Devuelve `None` para nombres desconocidos; quien llama decide ignorarlos.
pub fn resolve_key(name: &str) -> Option<u32> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    // Letras sueltas: A-Z
    if name.len() == 1 {
        let ch = name.chars().next()?;
        return ch
            .is_ascii_alphabetic()
            .then(|| VK_A + (ch.to_ascii_uppercase() as u32 - 'A' as u32));
    }

    // Rangos numerados: D0-D9, NumPad0-NumPad9, F1-F24
    if let Some(n) = strip_prefix_ignore_case(name, "NumPad").and_then(parse_index) {
        return (n <= 9).then_some(VK_NUMPAD0 + n);
    }
    if let Some(n) = strip_prefix_ignore_case(name, "D").and_then(parse_index) {
        return (n <= 9).then_some(VK_0 + n);
    }
    if let Some(n) = strip_prefix_ignore_case(name, "F").and_then(parse_index) {
        return (1..=24).contains(&n).then(|| VK_F1 + n - 1);
    }

    NAMED_KEYS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|&(_, vk)| vk)
}

/// Resuelve un dígito suelto a la tecla `D<n>` de la fila superior
///
/// Nunca devuelve el código del teclado numérico ni de una tecla de función.
pub fn resolve_digit(digit: char) -> Option<u32> {
    let d = digit.to_digit(10)?;
    resolve_key(&format!("D{}", d))
}

/// Nombre legible de un código de tecla (para logs)
///
/// Los nombres de los rangos numerados se construyen al vuelo; los de la
/// tabla se prestan sin copiar.
pub fn key_name(vk: u32) -> Option<Cow<'static, str>> {
    match vk {
        0x30..=0x39 => Some(Cow::Owned(char::from(b'0' + (vk - VK_0) as u8).to_string())),
        0x41..=0x5A => Some(Cow::Owned(char::from(b'A' + (vk - VK_A) as u8).to_string())),
        0x60..=0x69 => Some(Cow::Owned(format!("NumPad{}", vk - VK_NUMPAD0))),
        0x70..=0x87 => Some(Cow::Owned(format!("F{}", vk - VK_F1 + 1))),
        _ => NAMED_KEYS
            .iter()
            .find(|&&(_, code)| code == vk)
            .map(|&(name, _)| Cow::Borrowed(name)),
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// Índice decimal sin signo (rechaza "+1", "", etc.)
fn parse_index(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
