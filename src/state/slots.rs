use std::collections::BTreeMap;

use crate::{
    animation::blend::Blended,
    foundation::core::Argb,
    foundation::error::{CueError, CueResult},
};

/// Stable handle to a slot inside one [`AnimState`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SlotId(pub u32);

/// Storage width of an integral slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Width {
    W1,
    W2,
    W4,
    W8,
}

impl Width {
    pub fn bytes(self) -> u8 {
        match self {
            Self::W1 => 1,
            Self::W2 => 2,
            Self::W4 => 4,
            Self::W8 => 8,
        }
    }

    /// Rejects every byte count other than 1, 2, 4 and 8.
    pub fn from_bytes(bytes: u8) -> CueResult<Self> {
        match bytes {
            1 => Ok(Self::W1),
            2 => Ok(Self::W2),
            4 => Ok(Self::W4),
            8 => Ok(Self::W8),
            other => Err(CueError::validation(format!(
                "unsupported slot width {other} (expected 1, 2, 4 or 8 bytes)"
            ))),
        }
    }

    /// Keep only the low `bytes()` bytes of `bits`.
    pub fn truncate(self, bits: u64) -> u64 {
        match self {
            Self::W8 => bits,
            w => bits & ((1u64 << (u32::from(w.bytes()) * 8)) - 1),
        }
    }

    /// Sign-extend the low `bytes()` bytes of `bits`.
    pub fn sign_extend(self, bits: u64) -> i64 {
        let shift = 64 - u32::from(self.bytes()) * 8;
        ((bits << shift) as i64) >> shift
    }
}

impl TryFrom<u8> for Width {
    type Error = CueError;

    fn try_from(bytes: u8) -> CueResult<Self> {
        Self::from_bytes(bytes)
    }
}

impl From<Width> for u8 {
    fn from(w: Width) -> u8 {
        w.bytes()
    }
}

/// Storage kind of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Int(Width),
    Float,
}

/// Current content of a slot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum SlotValue {
    /// Raw bits, already truncated to the slot width.
    Int(u64),
    Float(f32),
}

#[derive(Clone, Debug)]
struct Slot {
    name: String,
    kind: SlotKind,
    value: SlotValue,
}

/// Caller-owned animation state: a fixed arena of named variable slots.
///
/// Actions and tweens address slots through [`SlotId`] handles. Slots are
/// never removed, so a handle stays valid for the lifetime of the state it
/// was issued by.
#[derive(Clone, Debug, Default)]
pub struct AnimState {
    slots: Vec<Slot>,
    by_name: BTreeMap<String, SlotId>,
}

impl AnimState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an integral slot holding `initial` (truncated to `width`).
    pub fn add_int(
        &mut self,
        name: impl Into<String>,
        width: Width,
        initial: u64,
    ) -> CueResult<SlotId> {
        self.add(
            name.into(),
            SlotKind::Int(width),
            SlotValue::Int(width.truncate(initial)),
        )
    }

    /// Declare a 4-byte slot holding a packed color.
    pub fn add_color(&mut self, name: impl Into<String>, initial: Argb) -> CueResult<SlotId> {
        self.add_int(name, Width::W4, u64::from(initial.0))
    }

    pub fn add_float(&mut self, name: impl Into<String>, initial: f32) -> CueResult<SlotId> {
        self.add(name.into(), SlotKind::Float, SlotValue::Float(initial))
    }

    fn add(&mut self, name: String, kind: SlotKind, value: SlotValue) -> CueResult<SlotId> {
        if name.is_empty() {
            return Err(CueError::validation("slot name must be non-empty"));
        }
        if self.by_name.contains_key(&name) {
            return Err(CueError::validation(format!(
                "duplicate slot name '{name}'"
            )));
        }
        let id = SlotId(
            u32::try_from(self.slots.len())
                .map_err(|_| CueError::validation("too many slots"))?,
        );
        self.by_name.insert(name.clone(), id);
        self.slots.push(Slot { name, kind, value });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<SlotId> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, id: SlotId) -> Option<&str> {
        self.slot(id).map(|s| s.name.as_str())
    }

    pub fn kind(&self, id: SlotId) -> Option<SlotKind> {
        self.slot(id).map(|s| s.kind)
    }

    pub fn get(&self, id: SlotId) -> Option<SlotValue> {
        self.slot(id).map(|s| s.value)
    }

    /// Raw bits of an integral slot.
    pub fn bits(&self, id: SlotId) -> Option<u64> {
        match self.get(id)? {
            SlotValue::Int(bits) => Some(bits),
            SlotValue::Float(_) => None,
        }
    }

    /// Integral slot value, sign-extended from its width.
    pub fn int(&self, id: SlotId) -> Option<i64> {
        let slot = self.slot(id)?;
        match (slot.kind, slot.value) {
            (SlotKind::Int(w), SlotValue::Int(bits)) => Some(w.sign_extend(bits)),
            _ => None,
        }
    }

    /// Low 32 bits of an integral slot, read as a packed color.
    pub fn color(&self, id: SlotId) -> Option<Argb> {
        self.bits(id).map(|bits| Argb(bits as u32))
    }

    pub fn float(&self, id: SlotId) -> Option<f32> {
        match self.get(id)? {
            SlotValue::Float(v) => Some(v),
            SlotValue::Int(_) => None,
        }
    }

    /// All slots as `(id, name, value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &str, SlotValue)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (SlotId(i as u32), s.name.as_str(), s.value))
    }

    /// Write raw bits into an integral slot, truncated to its width.
    ///
    /// Returns `false` (and leaves the slot untouched) if the handle is unknown
    /// or the slot is not integral.
    pub fn write_bits(&mut self, id: SlotId, bits: u64) -> bool {
        match self.slot_mut(id) {
            Some(Slot {
                kind: SlotKind::Int(w),
                value,
                ..
            }) => {
                *value = SlotValue::Int(w.truncate(bits));
                true
            }
            _ => false,
        }
    }

    /// Write into a float slot. Returns `false` if the slot is not a float.
    pub fn write_float(&mut self, id: SlotId, v: f32) -> bool {
        match self.slot_mut(id) {
            Some(Slot {
                kind: SlotKind::Float,
                value,
                ..
            }) => {
                *value = SlotValue::Float(v);
                true
            }
            _ => false,
        }
    }

    /// Store a blended tween value. Integers are written as two's complement.
    pub fn write_blended(&mut self, id: SlotId, v: Blended) -> bool {
        match v {
            Blended::Int(i) => self.write_bits(id, i64::from(i) as u64),
            Blended::Color(c) => self.write_bits(id, u64::from(c.0)),
            Blended::Float(f) => self.write_float(id, f),
        }
    }

    fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.0 as usize)
    }

    fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0 as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/slots.rs"]
mod tests;
