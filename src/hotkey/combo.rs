//! Parseo de combinaciones de teclas ("Ctrl+Alt+P")

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use super::keys::{key_name, resolve_digit, resolve_key};
use crate::constants::{MOD_ALT, MOD_CONTROL, MOD_SHIFT, MOD_WIN};
use crate::error::{HotkeyError, HotkeyResult};

/// Conjunto de modificadores (flags de `RegisterHotKey`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: Modifiers = Modifiers(MOD_ALT);
    pub const CONTROL: Modifiers = Modifiers(MOD_CONTROL);
    pub const SHIFT: Modifiers = Modifiers(MOD_SHIFT);
    pub const WIN: Modifiers = Modifiers(MOD_WIN);

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(&self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Clasifica un segmento como modificador (sin distinguir mayúsculas)
    pub fn from_token(token: &str) -> Option<Modifiers> {
        const NAMES: [(&str, Modifiers); 5] = [
            ("Ctrl", Modifiers::CONTROL),
            ("Control", Modifiers::CONTROL),
            ("Alt", Modifiers::ALT),
            ("Shift", Modifiers::SHIFT),
            ("Win", Modifiers::WIN),
        ];

        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|&(_, modifier)| modifier)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Modifiers::CONTROL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::WIN, "Win"),
        ];
        let parts: Vec<&str> = names
            .iter()
            .filter(|(m, _)| self.contains(*m))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&parts.join("+"))
    }
}

/// Combinación ya resuelta: modificadores + código de tecla virtual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combo {
    pub modifiers: Modifiers,
    pub vk: u32,
}

impl Combo {
    pub fn new(modifiers: Modifiers, vk: u32) -> Self {
        Self { modifiers, vk }
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{}+", self.modifiers)?;
        }
        match key_name(self.vk) {
            Some(name) => f.write_str(&name),
            None => write!(f, "{:#04x}", self.vk),
        }
    }
}

impl FromStr for Combo {
    type Err = HotkeyError;

    fn from_str(s: &str) -> HotkeyResult<Self> {
        parse_combo(s)
    }
}

/// Parsea una combinación separada por `+`
///
/// - Cada segmento se recorta y se clasifica primero como modificador
/// - Un dígito suelto se resuelve como tecla `D<n>` de la fila superior
/// - Los nombres desconocidos se ignoran
/// - Si hay varias teclas gana la última; los modificadores se acumulan
pub fn parse_combo(text: &str) -> HotkeyResult<Combo> {
    if text.trim().is_empty() {
        return Err(HotkeyError::Empty);
    }

    let mut modifiers = Modifiers::NONE;
    let mut vk = None;

    for token in text.split('+').map(str::trim) {
        if let Some(modifier) = Modifiers::from_token(token) {
            modifiers |= modifier;
            continue;
        }

        let mut chars = token.chars();
        let resolved = match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_digit() => resolve_digit(ch),
            _ => resolve_key(token),
        };

        if resolved.is_some() {
            vk = resolved;
        }
    }

    match vk {
        Some(vk) => Ok(Combo::new(modifiers, vk)),
        None => Err(HotkeyError::MissingKey(text.to_string())),
    }
}
