// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Constructor synthesis for standalone classes.

use std::collections::HashMap;

use inity::prelude::*;

#[inity]
#[derive(Debug, Clone, PartialEq)]
pub struct Bob {
    pub some_int: i64,
    pub some_str: String
}

#[test]
fn basic_init() {
    let bob = Bob::new(1, "s".to_string());
    assert_eq!(bob.some_int, 1);
    assert_eq!(bob.some_str, "s");
}

#[inity]
#[derive(Debug)]
pub struct Basic {
    pub a: i64,
    #[field(default = 1)]
    pub b: i64,
    pub c: String
}

#[test]
fn required_fields_come_first() {
    let basic = Basic::new(2, "hi".to_string());
    assert_eq!((basic.a, basic.b, basic.c.as_str()), (2, 1, "hi"));
}

#[test]
fn keyword_fields_override_defaults() {
    let basic = Basic::new_with(2, "hi".to_string(), BasicOptions {
        b: 5
    });
    assert_eq!(basic.b, 5);
}

#[test]
fn field_list_keeps_declaration_order() {
    let names: Vec<_> = Basic::FIELDS.iter().map(|field| field.name()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(Basic::NAME, "Basic");
}

#[inity]
pub struct Jim {
    pub a: i64,
    #[field(property)]
    pub will_shadow: i64
}

impl Jim {
    pub fn will_shadow(&self) -> i64 {
        self._will_shadow
    }
}

#[test]
fn property_shadow_stores_prefixed_field() {
    let jim = Jim::new_with(1, JimOptions {
        will_shadow: 10
    });
    assert_eq!(jim.will_shadow(), 10);
    assert_eq!(jim._will_shadow, 10);
}

#[test]
fn property_shadow_defaults_to_placeholder() {
    let jim = Jim::new(1);
    assert_eq!(jim.will_shadow(), 0);

    let field = Jim::field("will_shadow").unwrap();
    assert_eq!(field.role(), FieldRole::PropertyShadow);
    assert_eq!(field.default_kind(), DefaultKind::Property);
    assert_eq!(field.storage(), Some("_will_shadow"));
}

#[inity]
pub struct Something {
    #[field(default = 1, metadata(hello = "world", weight = -2))]
    pub has_default: i64,
    #[field(default_factory = HashMap::new)]
    pub also_has_default: HashMap<String, i64>
}

#[test]
fn field_metadata_is_exposed() {
    let something = Something::new();
    assert_eq!(something.has_default, 1);
    assert!(something.also_has_default.is_empty());

    let field = Something::field("has_default").unwrap();
    assert_eq!(field.metadata("hello").and_then(MetaValue::as_str), Some("world"));
    assert_eq!(field.metadata("weight"), Some(&MetaValue::Int(-2)));
    assert_eq!(field.metadata("missing"), None);
}

#[test]
fn default_factory_is_a_factory() {
    let field = Something::field("also_has_default").unwrap();
    assert_eq!(field.default_kind(), DefaultKind::Factory);
    assert_eq!(field.type_name(), "HashMap<String, i64>");
}

#[inity]
pub struct Classy {
    #[field(default = "Don't init me")]
    pub class_var: ClassVar<&'static str>
}

#[test]
fn class_var_is_a_constant_not_a_parameter() {
    let _classy = Classy::new();
    assert_eq!(Classy::CLASS_VAR, "Don't init me");

    let field = Classy::field("class_var").unwrap();
    assert_eq!(field.role(), FieldRole::ClassVar);
    assert_eq!(field.storage(), None);
}

#[inity(hook)]
pub struct Posty {
    pub init_var: InitVar<String>,
    #[field(default = None)]
    pub holder: Option<String>
}

impl Posty {
    fn after_init(&mut self, init_var: String) {
        self.holder = Some(init_var);
    }
}

#[test]
fn hook_receives_init_vars() {
    let posty = Posty::new("something".to_string());
    assert_eq!(posty.holder.as_deref(), Some("something"));
    assert_eq!(Posty::fields_of(FieldRole::InitVar).count(), 1);
}

#[inity]
pub struct Undeclared {
    pub init_var: InitVar<String>,
    #[field(default = None)]
    pub holder: Option<String>
}

impl Undeclared {
    fn after_init(&mut self, init_var: String) {
        self.holder = Some(init_var);
    }
}

#[test]
fn inherent_hook_runs_without_hook_option() {
    let undeclared = Undeclared::new("x".to_string());
    assert_eq!(undeclared.holder.as_deref(), Some("x"));
}

#[inity]
pub struct Greeter {
    pub name: String,
    #[field(default = false)]
    pub ready: bool
}

impl Greeter {
    fn after_init(&mut self) {
        self.ready = !self.name.is_empty();
    }
}

#[test]
fn inherent_hook_without_init_vars_runs() {
    assert!(Greeter::new("ann".to_string()).ready);
    assert!(!Greeter::new(String::new()).ready);
}

#[inity]
pub struct Discarded {
    pub name: String,
    pub token: InitVar<String>
}

#[test]
fn init_vars_without_hook_are_dropped() {
    let discarded = Discarded::new("n".to_string(), "t".to_string());
    assert_eq!(discarded.name, "n");
}

#[allow(non_snake_case)]
fn cacoon__x__() -> &'static str {
    "butterfly"
}

#[inity(factory_suffix = "__x__", shadow_prefix = "prop_", hook = "bob")]
pub struct VeryCustom {
    #[field(default = cacoon__x__)]
    pub thing: &'static str,
    #[field(property)]
    pub shadow: i64,
    #[field(default = None)]
    pub hooked: Option<&'static str>
}

impl VeryCustom {
    fn bob(&mut self) {
        self.hooked = Some("hi");
    }

    pub fn shadow(&self) -> i64 {
        self.prop_shadow
    }
}

#[test]
fn custom_settings() {
    let custom = VeryCustom::new_with(VeryCustomOptions {
        shadow: 1,
        ..Default::default()
    });
    assert_eq!(custom.thing, "butterfly");
    assert_eq!(custom.hooked, Some("hi"));
    assert_eq!(custom.shadow(), 1);

    let field = VeryCustom::field("shadow").unwrap();
    assert_eq!(field.storage(), Some("prop_shadow"));
}

#[inity]
pub struct Markers {
    pub token: inity::InitVar<u32>,
    #[field(default = 4)]
    pub limit: inity::ClassVar<u8>
}

#[test]
fn qualified_markers_are_recognized() {
    let _markers = Markers::new(7);
    assert_eq!(Markers::LIMIT, 4);
    assert_eq!(Markers::field("token").unwrap().type_name(), "inity::InitVar<u32>");
}

#[inity]
pub struct Empty {}

#[test]
fn empty_class_constructs() {
    let _empty = Empty::new();
    assert!(Empty::FIELDS.is_empty());
}
