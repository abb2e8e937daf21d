//! JSON model of the descriptors handed to the naming pass.
//!
//! Only the keys the pass reads or writes are typed; everything else is kept
//! in `extra` so that a read → rewrite → write cycle preserves foreign
//! metadata untouched.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

//==================================================================================DESCRIPTOR_SET
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
/// Every file of one code-generation request.
pub struct DescriptorSet {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

//==================================================================================FILE
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
/// One `.proto` file.
pub struct FileDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub options: FileOptions,
    #[serde(default)]
    pub messages: Vec<MessageDescriptor>,
    /// File-level extensions; never renamed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<FieldDescriptor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
/// Generator switches carried at file level. `None` means "not set".
pub struct FileOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gogoproto_import: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizer_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marshaler_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmarshaler_all: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

//==================================================================================MESSAGE
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
/// A message type with its fields and nested types.
pub struct MessageDescriptor {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<MessageDescriptor>,
    /// Extensions declared inside the message; never renamed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<FieldDescriptor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

//==================================================================================FIELD
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
/// A declared field. `custom_name` is the naming override read by the
/// downstream generator.
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A non-empty override is present: the field must not be renamed.
    /// An empty `custom_name` counts as unset.
    pub fn has_custom_name(&self) -> bool {
        self.custom_name.as_deref().is_some_and(|name| !name.is_empty())
    }
}

impl MessageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_nested(mut self, message: MessageDescriptor) -> Self {
        self.nested.push(message);
        self
    }
}
