use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::data_value::DataValue;
use crate::protocol::structs::payload_cursor::PayloadCursor;
use crate::protocol::varint;

impl DataValue {
    /// Reads the field for `kind`, `None` when the kind has no wire field.
    pub fn read(kind: DataTypeKind, cursor: &mut PayloadCursor) -> Result<Option<DataValue>, CodecError> {
        if kind.is_scalar() || kind.is_byte_counter() {
            return Ok(Some(DataValue::Scalar(cursor.varint(kind.name())?)));
        }
        match kind {
            DataTypeKind::HttpReqRate => Ok(Some(DataValue::Rate {
                tick: cursor.varint("rate tick")?,
                current: cursor.varint("rate current")?,
                previous: cursor.varint("rate previous")?,
            })),
            DataTypeKind::ServerId => {
                let id = cursor.varint("server id")?;
                let x = cursor.varint("server x")?;
                let y = cursor.varint("server y")?;
                let name_len = cursor.varint("server name length")?;
                let mut name = Vec::new();
                for _ in 0..name_len {
                    name.push(cursor.varint("server name")?);
                }
                Ok(Some(DataValue::Server { id, x, y, name }))
            }
            _ => Ok(None),
        }
    }

    /// Writes the field for `kind`. A missing value is written as its zero shape
    /// so the record stays parseable.
    pub fn write(kind: DataTypeKind, value: Option<&DataValue>, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        if kind.is_byte_counter() || !kind.is_on_wire() {
            return Ok(());
        }
        let zero = DataValue::zero_for(kind);
        let value = match value.or(zero.as_ref()) {
            Some(value) => value,
            None => return Ok(()),
        };
        match (kind, value) {
            (kind, DataValue::Scalar(number)) if kind.is_scalar() => {
                varint::encode_into(*number, bytes);
            }
            (DataTypeKind::HttpReqRate, DataValue::Rate { tick, current, previous }) => {
                varint::encode_into(*tick, bytes);
                varint::encode_into(*current, bytes);
                varint::encode_into(*previous, bytes);
            }
            (DataTypeKind::ServerId, DataValue::Server { id, x, y, name }) => {
                varint::encode_into(*id, bytes);
                varint::encode_into(*x, bytes);
                varint::encode_into(*y, bytes);
                varint::encode_into(name.len() as u64, bytes);
                for character in name {
                    varint::encode_into(*character, bytes);
                }
            }
            (kind, _) => return Err(CodecError::ValueMismatch(kind)),
        }
        Ok(())
    }

    pub fn zero_for(kind: DataTypeKind) -> Option<DataValue> {
        if kind.is_scalar() || kind.is_byte_counter() {
            return Some(DataValue::Scalar(0));
        }
        match kind {
            DataTypeKind::HttpReqRate => Some(DataValue::Rate { tick: 0, current: 0, previous: 0 }),
            DataTypeKind::ServerId => Some(DataValue::Server { id: 0, x: 0, y: 0, name: Vec::new() }),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<u64> {
        match self {
            DataValue::Scalar(number) => Some(*number),
            _ => None,
        }
    }

    /// Component-wise sum, `None` when the shapes differ or for server descriptors.
    pub fn summed(&self, other: &DataValue) -> Option<DataValue> {
        match (self, other) {
            (DataValue::Scalar(left), DataValue::Scalar(right)) => Some(DataValue::Scalar(left.saturating_add(*right))),
            (
                DataValue::Rate { tick, current, previous },
                DataValue::Rate { tick: other_tick, current: other_current, previous: other_previous },
            ) => Some(DataValue::Rate {
                tick: tick.saturating_add(*other_tick),
                current: current.saturating_add(*other_current),
                previous: previous.saturating_add(*other_previous),
            }),
            _ => None,
        }
    }

    /// The number shown for this value in the presentation feed.
    pub fn display_number(&self) -> u64 {
        match self {
            DataValue::Scalar(number) => *number,
            DataValue::Rate { current, .. } => *current,
            DataValue::Server { id, .. } => *id,
        }
    }
}
