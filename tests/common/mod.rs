#![allow(dead_code)]
use bratdoc::*;

/// A small biology project: one entity type, one attribute type, one relation
/// type and one event type.
pub fn setup_schema() -> Result<ProjectSchema, BratError> {
    ProjectSchema::builder()
        .with_id("P1")
        .with_title("Biology")
        .with_description("Protein annotation")
        .with_entity_type(EntityType {
            type_code: "Protein".to_string(),
            name: "Protein".to_string(),
            labels: vec!["Protein".to_string(), "Pro".to_string()],
            bg_color: "#7fa2ff".to_string(),
        })
        .with_attribute_type(AttributeType {
            type_code: "Negation".to_string(),
            name: "Negation".to_string(),
            values: vec!["Negated".to_string(), "Speculated".to_string()],
        })
        .with_relation_type(RelationType {
            type_code: "Binds".to_string(),
            name: "Binds".to_string(),
            labels: vec!["Binds".to_string()],
            color: "green".to_string(),
        })
        .with_event_type(EventType {
            type_code: "Binding".to_string(),
            name: "Binding".to_string(),
            labels: vec!["Binding".to_string()],
            bg_color: "lightgreen".to_string(),
            attributes: vec!["Negation".to_string()],
        })
        .build()
}

/// A wire document annotated against [`setup_schema`]: two protein entities,
/// one negated, one binding relation between them, and one binding event
/// anchored on the verb.
pub fn setup_wire() -> WireDocument {
    let mut wire = WireDocument::new("p53 binds mdm2");
    wire.ctime = 1351154734.5055847;
    wire.entities.push(WireEntity(
        "T1".to_string(),
        "Protein".to_string(),
        vec![Span(0, 3)],
    ));
    wire.entities.push(WireEntity(
        "T2".to_string(),
        "Protein".to_string(),
        vec![Span(10, 14)],
    ));
    wire.attributes.push(WireAttribute(
        "A1".to_string(),
        "Negation".to_string(),
        "T1".to_string(),
    ));
    wire.relations.push(WireRelation(
        "R1".to_string(),
        "Binds".to_string(),
        (
            WireArg("Arg1".to_string(), "T1".to_string()),
            WireArg("Arg2".to_string(), "T2".to_string()),
        ),
    ));
    wire.triggers.push(WireTrigger(
        "T3".to_string(),
        "Binding".to_string(),
        vec![Span(4, 9)],
    ));
    wire.events.push(WireEvent(
        "E1".to_string(),
        "T3".to_string(),
        vec![
            WireLink("Theme".to_string(), "T1".to_string()),
            WireLink("Theme2".to_string(), "T2".to_string()),
        ],
    ));
    wire
}
