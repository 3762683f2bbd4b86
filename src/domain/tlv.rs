/// Encodes a single `ID || LEN || VALUE` field.
///
/// `LEN` is the UTF-8 byte length of `value`, rendered as two zero-padded
/// digits. Values longer than 99 bytes do not fit the format and are not
/// checked here.
pub fn encode(id: &str, value: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2 + value.len());
    push(&mut out, id, value);
    out
}

fn push(buf: &mut String, id: &str, value: &str) {
    debug_assert_eq!(id.len(), 2, "field ids are two digits");
    buf.push_str(id);
    buf.push_str(&format!("{:02}", value.len()));
    buf.push_str(value);
}

/// Accumulates TLV fields in insertion order with no separators.
///
/// Used both for the top-level payload and for nested templates, whose
/// finished value becomes the value of an enclosing field.
#[derive(Debug, Default, Clone)]
pub struct TlvWriter {
    buf: String,
}

impl TlvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, id: &str, value: &str) -> Self {
        push(&mut self.buf, id, value);
        self
    }

    /// Appends the field only when `value` is present and non-empty.
    pub fn optional_field(self, id: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.field(id, v),
            _ => self,
        }
    }

    /// Appends a field whose value is itself a sequence of TLV fields.
    pub fn template(self, id: &str, nested: TlvWriter) -> Self {
        self.field(id, &nested.finish())
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
