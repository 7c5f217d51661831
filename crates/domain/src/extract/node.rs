use serde_json::{Map, Value};

/// Name used when a node carries none
pub const UNKNOWN_NAME: &str = "Unknown";
/// Path marker for UDT parameters
pub const PARAM_MARKER: &str = "[PARAM]";

const KEY_TAGS: &str = "tags";
const KEY_PARAMETERS: &str = "parameters";

/// Loose JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a scalar for a text column; `null` counts as absent.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Key access over a node that may not be an object at all.
///
/// Non-object nodes behave as if they had no keys.
#[derive(Debug, Clone, Copy)]
struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    fn of(value: &'a Value) -> Self {
        Self(value.as_object())
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    fn contains(&self, key: &str) -> bool {
        self.0.is_some_and(|map| map.contains_key(key))
    }

    fn truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(text_of)
    }

    fn documentation(&self) -> String {
        self.text("documentation").unwrap_or_default()
    }

    /// Child tags under `tags`, in list form or name-keyed form.
    fn child_tags(&self) -> Vec<TagNode<'a>> {
        match self.get(KEY_TAGS) {
            Some(Value::Array(items)) => items.iter().map(|v| TagNode::new(v, None)).collect(),
            Some(Value::Object(named)) => named
                .iter()
                .map(|(name, v)| TagNode::new(v, Some(name.as_str())))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A tag definition: atomic tag, folder, or nested UDT instance
#[derive(Debug, Clone, Copy)]
pub struct TagNode<'a> {
    fields: Fields<'a>,
    key: Option<&'a str>,
}

impl<'a> TagNode<'a> {
    /// `key` is the name under which the node was found in a name-keyed map.
    pub fn new(value: &'a Value, key: Option<&'a str>) -> Self {
        Self {
            fields: Fields::of(value),
            key,
        }
    }

    /// Mapping key if non-empty, else the `name` field.
    pub fn explicit_name(&self) -> Option<String> {
        self.key
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| self.fields.text("name"))
    }

    pub fn name(&self) -> String {
        self.explicit_name()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    pub fn documentation(&self) -> String {
        self.fields.documentation()
    }

    pub fn has_alarm(&self) -> bool {
        self.fields.truthy("alarms") || self.fields.truthy("alarmConfig")
    }

    /// Presence of `historicalDeadband` or `historyProvider` alone counts.
    pub fn has_history(&self) -> bool {
        self.fields.truthy("historyEnabled")
            || self.fields.contains("historicalDeadband")
            || self.fields.contains("historyProvider")
    }

    pub fn children(&self) -> Vec<TagNode<'a>> {
        self.fields.child_tags()
    }
}

/// A UDT parameter; never has children
#[derive(Debug, Clone, Copy)]
pub struct ParameterNode<'a> {
    fields: Fields<'a>,
}

impl<'a> ParameterNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: Fields::of(value),
        }
    }

    pub fn name(&self) -> String {
        self.fields
            .text("name")
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    pub fn documentation(&self) -> String {
        self.fields.documentation()
    }
}

/// Any object at the top of a document, whatever its shape
#[derive(Debug, Clone, Copy)]
pub struct ContainerNode<'a> {
    value: &'a Value,
    fields: Fields<'a>,
}

impl<'a> ContainerNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            fields: Fields::of(value),
        }
    }

    pub fn has_tags(&self) -> bool {
        self.fields.contains(KEY_TAGS)
    }

    pub fn has_parameters(&self) -> bool {
        self.fields.contains(KEY_PARAMETERS)
    }

    /// True when the object itself describes a tag or type.
    pub fn is_type_descriptor(&self) -> bool {
        self.fields.contains("typeId") || self.fields.contains("tagType")
    }

    pub fn tags(&self) -> Vec<TagNode<'a>> {
        self.fields.child_tags()
    }

    /// Parameters in list form; any other shape yields nothing.
    pub fn parameters(&self) -> Vec<ParameterNode<'a>> {
        match self.fields.get(KEY_PARAMETERS) {
            Some(Value::Array(items)) => items.iter().map(ParameterNode::new).collect(),
            _ => Vec::new(),
        }
    }

    /// The container viewed as a tag in its own right
    pub fn as_tag(&self) -> TagNode<'a> {
        TagNode::new(self.value, None)
    }

    /// Expand into the nodes each capability contributes.
    ///
    /// The three capabilities are checked independently, so an object that
    /// has `tags` and a `tagType` contributes its children and then itself
    /// (which walks the same children again).
    pub fn dispatch(&self) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        if self.has_tags() {
            nodes.extend(self.tags().into_iter().map(Node::Tag));
        }
        if self.has_parameters() {
            nodes.extend(self.parameters().into_iter().map(Node::Parameter));
        }
        if self.is_type_descriptor() {
            nodes.push(Node::Tag(self.as_tag()));
        }
        nodes
    }
}

/// A node of an exported tag tree, by the role it plays in the walk
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Tag(TagNode<'a>),
    Parameter(ParameterNode<'a>),
    Container(ContainerNode<'a>),
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self::Container(ContainerNode::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy}");
        }
        for truthy in [json!(true), json!(1), json!("false"), json!([{}]), json!({"a": 1})] {
            assert!(is_truthy(&truthy), "{truthy}");
        }
    }

    #[test]
    fn test_tag_name_resolution() {
        let value = json!({"name": "Inner"});
        assert_eq!(TagNode::new(&value, Some("Outer")).name(), "Outer");
        assert_eq!(TagNode::new(&value, Some("")).name(), "Inner");
        assert_eq!(TagNode::new(&value, None).name(), "Inner");
        assert_eq!(TagNode::new(&json!({}), None).name(), UNKNOWN_NAME);
        assert_eq!(TagNode::new(&json!({"name": null}), None).name(), UNKNOWN_NAME);
        assert_eq!(TagNode::new(&json!({"name": 7}), None).name(), "7");
    }

    #[test]
    fn test_non_object_node_degrades_to_defaults() {
        let value = json!("just a string");
        let node = TagNode::new(&value, None);
        assert_eq!(node.name(), UNKNOWN_NAME);
        assert_eq!(node.documentation(), "");
        assert!(!node.has_alarm());
        assert!(!node.has_history());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_alarm_detection() {
        assert!(!TagNode::new(&json!({"alarms": []}), None).has_alarm());
        assert!(TagNode::new(&json!({"alarms": [{}]}), None).has_alarm());
        assert!(TagNode::new(&json!({"alarmConfig": {"mode": "x"}}), None).has_alarm());
        assert!(!TagNode::new(&json!({"alarmConfig": null}), None).has_alarm());
    }

    #[test]
    fn test_history_detection() {
        assert!(TagNode::new(&json!({"historyEnabled": "true"}), None).has_history());
        assert!(TagNode::new(&json!({"historyEnabled": true}), None).has_history());
        assert!(!TagNode::new(&json!({"historyEnabled": false}), None).has_history());
        assert!(TagNode::new(&json!({"historicalDeadband": null}), None).has_history());
        assert!(TagNode::new(&json!({"historyProvider": ""}), None).has_history());
    }

    #[test]
    fn test_children_in_both_shapes() {
        let listed = json!({"tags": [{"name": "A"}, {"name": "B"}]});
        let names: Vec<_> = TagNode::new(&listed, None)
            .children()
            .iter()
            .map(TagNode::name)
            .collect();
        assert_eq!(names, ["A", "B"]);

        let keyed = json!({"tags": {"Z": {}, "A": {"name": "ignored"}}});
        let names: Vec<_> = TagNode::new(&keyed, None)
            .children()
            .iter()
            .map(TagNode::name)
            .collect();
        assert_eq!(names, ["Z", "A"]);
    }

    #[test]
    fn test_container_capabilities() {
        let value = json!({"tags": [], "parameters": [], "typeId": "Motor"});
        let node = ContainerNode::new(&value);
        assert!(node.has_tags());
        assert!(node.has_parameters());
        assert!(node.is_type_descriptor());

        let plain = json!({"name": "folder"});
        let node = ContainerNode::new(&plain);
        assert!(!node.has_tags() && !node.has_parameters() && !node.is_type_descriptor());
        assert!(node.dispatch().is_empty());
    }

    #[test]
    fn test_parameters_only_in_list_form() {
        let value = json!({"parameters": {"P1": {"value": 1}}});
        assert!(ContainerNode::new(&value).parameters().is_empty());
    }
}
