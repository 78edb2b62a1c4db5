#[cfg(test)]
use crate::*;

#[test]
fn parse_json_wire_entity() {
    let json = r#"["T1","Protein",[[0,7]]]"#;

    let entity: WireEntity = serde_json::from_str(json).unwrap();

    assert_eq!(entity.id(), "T1");
    assert_eq!(entity.type_code(), "Protein");
    assert_eq!(entity.locations(), &[Span(0, 7)]);
}

#[test]
fn parse_json_wire_entity_discontinuous() {
    let json = r#"["T2","Protein",[[0,7],[12,20]]]"#;

    let entity: WireEntity = serde_json::from_str(json).unwrap();

    assert_eq!(entity.locations(), &[Span(0, 7), Span(12, 20)]);
}

#[test]
fn parse_json_wire_attribute() {
    let json = r#"["A1","Negation","T1"]"#;

    let attribute: WireAttribute = serde_json::from_str(json).unwrap();

    assert_eq!(attribute.id(), "A1");
    assert_eq!(attribute.type_code(), "Negation");
    assert_eq!(attribute.target_id(), "T1");
}

#[test]
fn parse_json_wire_relation() {
    let json = r#"["R1","Binds",[["Arg1","T1"],["Arg2","T2"]]]"#;

    let relation: WireRelation = serde_json::from_str(json).unwrap();

    assert_eq!(relation.id(), "R1");
    assert_eq!(relation.type_code(), "Binds");
    assert_eq!(relation.from().role(), "Arg1");
    assert_eq!(relation.from().target_id(), "T1");
    assert_eq!(relation.to().role(), "Arg2");
    assert_eq!(relation.to().target_id(), "T2");
}

#[test]
fn parse_json_wire_event() {
    let json = r#"["E1","T3",[["Theme","T1"],["Site","T2"]]]"#;

    let event: WireEvent = serde_json::from_str(json).unwrap();

    assert_eq!(event.id(), "E1");
    assert_eq!(event.trigger_id(), "T3");
    assert_eq!(event.links().len(), 2);
    assert_eq!(event.links()[0].link_type(), "Theme");
    assert_eq!(event.links()[0].target_id(), "T1");
}

#[test]
fn parse_json_wire_document() -> Result<(), BratError> {
    let json = r#"{
        "text": "protein binds protein",
        "entities": [["T1","Protein",[[0,7]]],["T2","Protein",[[14,21]]]],
        "attributes": [["A1","Negation","T1"]],
        "relations": [["R1","Binds",[["Arg1","T1"],["Arg2","T2"]]]],
        "triggers": [["T3","Binding",[[8,13]]]],
        "events": [["E1","T3",[["Theme","T1"]]]],
        "comments": [],
        "ctime": 1351154734.5055847,
        "messages": [],
        "modifications": [],
        "normalizations": [],
        "source_files": []
    }"#;

    let wire = WireDocument::from_json_str(json, &Config::default())?;

    assert_eq!(wire.text, "protein binds protein");
    assert_eq!(wire.entities.len(), 2);
    assert_eq!(wire.attributes.len(), 1);
    assert_eq!(wire.relations.len(), 1);
    assert_eq!(wire.triggers.len(), 1);
    assert_eq!(wire.events.len(), 1);
    assert_eq!(wire.ctime, 1351154734.5055847);
    Ok(())
}

#[test]
fn parse_json_wire_document_missing_lists() -> Result<(), BratError> {
    // the annotation surface may omit lists that are empty
    let json = r#"{ "text": "bare" }"#;

    let wire = WireDocument::from_json_str(json, &Config::default())?;

    assert_eq!(wire.text, "bare");
    assert!(wire.entities.is_empty());
    assert!(wire.events.is_empty());
    Ok(())
}

#[test]
fn parse_json_wire_document_wrong_arity() {
    // second entity tuple lacks its locations
    let json = r#"{
        "text": "protein binds protein",
        "entities": [["T1","Protein",[[0,7]]],["T2","Protein"]]
    }"#;

    let result = WireDocument::from_json_str(json, &Config::default());

    match result {
        Err(BratError::JsonError(e, Type::WireDocument, _)) => {
            // the path must locate the offending tuple
            assert!(e.path().to_string().starts_with("entities[1]"));
        }
        other => panic!("expected JsonError, got {:?}", other),
    }
}

#[test]
fn parse_json_project_schema() -> Result<(), BratError> {
    let json = r##"{
        "id": "P1",
        "title": "Biology",
        "description": "Protein annotation",
        "entities": [
            {"type": "Protein", "name": "Protein", "labels": ["Protein", "Pro"], "bgColor": "#7fa2ff"}
        ],
        "attributes": [
            {"type": "Negation", "name": "Negation", "values": ["Negated"]}
        ],
        "relations": [
            {"type": "Binds", "name": "Binds", "labels": ["Binds"], "color": "green"}
        ],
        "events": [
            {"type": "Binding", "name": "Binding", "labels": ["Binding"], "bgColor": "lightgreen", "attributes": ["Negation"]}
        ]
    }"##;

    let schema = ProjectSchemaBuilder::from_json_str(json, &Config::default())?.build()?;

    assert_eq!(schema.id(), "P1");
    assert_eq!(schema.title(), "Biology");
    let entity_type = schema.entity_type("Protein").unwrap();
    assert_eq!(entity_type.name, "Protein");
    assert_eq!(entity_type.bg_color, "#7fa2ff");
    assert_eq!(entity_type.labels, vec!["Protein", "Pro"]);
    assert!(schema.entity_type("Gene").is_none());
    assert_eq!(
        schema.attribute_type("Negation").unwrap().values,
        vec!["Negated"]
    );
    assert_eq!(schema.relation_type("Binds").unwrap().color, "green");
    assert_eq!(
        schema.event_type("Binding").unwrap().attributes,
        vec!["Negation"]
    );
    Ok(())
}

#[test]
fn schema_rejects_duplicate_type_code() {
    let result = ProjectSchema::builder()
        .with_entity_type(EntityType {
            type_code: "Protein".to_string(),
            name: "Protein".to_string(),
            labels: vec!["Protein".to_string()],
            bg_color: "#7fa2ff".to_string(),
        })
        .with_entity_type(EntityType {
            type_code: "Protein".to_string(),
            name: "Protein again".to_string(),
            labels: vec![],
            bg_color: "#ffffff".to_string(),
        })
        .build();

    match result {
        Err(BratError::DuplicateType(Type::EntityType, type_code)) => {
            assert_eq!(type_code, "Protein");
        }
        other => panic!("expected DuplicateType, got {:?}", other),
    }
}

#[test]
fn serialize_wire_document_positional() -> Result<(), BratError> {
    let mut wire = WireDocument::new("protein binds");
    wire.entities.push(WireEntity(
        "T1".to_string(),
        "Protein".to_string(),
        vec![Span(0, 7)],
    ));
    wire.relations.push(WireRelation(
        "R1".to_string(),
        "Binds".to_string(),
        (
            WireArg("Arg1".to_string(), "T1".to_string()),
            WireArg("Arg2".to_string(), "T2".to_string()),
        ),
    ));

    let json = wire.to_json_string(&Config::default())?;
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["entities"][0],
        serde_json::json!(["T1", "Protein", [[0, 7]]])
    );
    assert_eq!(
        value["relations"][0],
        serde_json::json!(["R1", "Binds", [["Arg1", "T1"], ["Arg2", "T2"]]])
    );
    // companion fields must be present for format compatibility
    assert!(value["comments"].is_array());
    assert!(value["messages"].is_array());
    assert!(value["modifications"].is_array());
    assert!(value["normalizations"].is_array());
    assert!(value["source_files"].is_array());
    assert!(value["ctime"].is_number());
    Ok(())
}

#[test]
fn serialize_pretty_json() -> Result<(), BratError> {
    let config = Config::default().with_dataformat(DataFormat::Json { compact: false });
    let wire = WireDocument::new("bare");

    let json = wire.to_json_string(&config)?;

    assert!(json.contains('\n'));
    let reread = WireDocument::from_json_str(&json, &config)?;
    assert_eq!(reread, wire);
    Ok(())
}

#[test]
fn span_display() {
    assert_eq!(Span(3, 8).to_string(), "3-8");
    assert_eq!(Span(3, 8).len(), 5);
    assert!(Span(4, 4).is_empty());
}
