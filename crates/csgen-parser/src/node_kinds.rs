//! Tree-sitter node kind names for the C# grammar.

pub const COMPILATION_UNIT: &str = "compilation_unit";

// Namespaces & imports
pub const NAMESPACE_DECLARATION: &str = "namespace_declaration";
pub const FILE_SCOPED_NAMESPACE_DECLARATION: &str = "file_scoped_namespace_declaration";
pub const USING_DIRECTIVE: &str = "using_directive";

// Type declarations
pub const CLASS_DECLARATION: &str = "class_declaration";
pub const STRUCT_DECLARATION: &str = "struct_declaration";
pub const INTERFACE_DECLARATION: &str = "interface_declaration";
pub const RECORD_DECLARATION: &str = "record_declaration";
// Older grammar releases use a dedicated node for `record struct`.
pub const RECORD_STRUCT_DECLARATION: &str = "record_struct_declaration";
pub const ENUM_DECLARATION: &str = "enum_declaration";

// Extras
pub const COMMENT: &str = "comment";

// Declaration header parts
pub const DECLARATION_LIST: &str = "declaration_list";
pub const MODIFIER: &str = "modifier";
pub const TYPE_PARAMETER_LIST: &str = "type_parameter_list";
pub const TYPE_PARAMETER_CONSTRAINTS_CLAUSE: &str = "type_parameter_constraints_clause";

// Anonymous keyword tokens following `record`
pub const STRUCT_KEYWORD: &str = "struct";
pub const CLASS_KEYWORD: &str = "class";

// Fields
pub const FIELD_NAME: &str = "name";
pub const FIELD_TYPE_PARAMETERS: &str = "type_parameters";
