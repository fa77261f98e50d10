#![allow(clippy::unwrap_used, clippy::expect_used)]

use carehome_sdk::{
    Assessment, Attendance, Employee, EmployeeFilter, EmploymentStatus, ResidentFilter,
    ResidentStatus,
};
use chrono::{NaiveDate, Timelike};
use serde_json::json;

use super::dto::*;
use crate::domain::error::DomainError;

fn body<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

#[test]
fn numbers_and_strings_are_interchangeable() {
    let a: AttendanceBody = body(json!({"ANCD": "A001", "EMPNO": 17, "WDT": "20240501"}));
    let attendance = Attendance::try_from(a).unwrap();
    assert_eq!(attendance.empno, "17");
    assert_eq!(
        attendance.work_date,
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    );

    let c: ConsultationBody = body(json!({"ANCD": "A001", "PNUM": "3", "CSDT": "2024-05-01"}));
    assert_eq!(c.into_draft().unwrap().pnum, 3);
}

#[test]
fn missing_identifiers_name_the_column() {
    let e: EmployeeBody = body(json!({"ANCD": "A001", "EMPNM": "김직원"}));
    assert!(matches!(
        Employee::try_from(e),
        Err(DomainError::MissingParameter { name: "EMPNO" })
    ));

    let r: ResidentBody = body(json!({"ANCD": "A001", "P_NM": "홍길동"}));
    assert!(matches!(
        r.into_resident(),
        Err(DomainError::MissingParameter { name: "PNUM" })
    ));

    let q = EmployeeQuery {
        ancd: Some("  ".to_owned()),
        ..EmployeeQuery::default()
    };
    assert!(matches!(
        EmployeeFilter::try_from(q),
        Err(DomainError::MissingParameter { name: "ancd" })
    ));
}

#[test]
fn list_filters_parse_status_words_and_codes() {
    let employees = EmployeeFilter::try_from(EmployeeQuery {
        ancd: Some("A001".to_owned()),
        status: Some("retired".to_owned()),
        ..EmployeeQuery::default()
    })
    .unwrap();
    assert_eq!(employees.status, Some(EmploymentStatus::Retired));

    let residents = ResidentFilter::try_from(ResidentQuery {
        ancd: Some("A001".to_owned()),
        status: Some("9".to_owned()),
        ..ResidentQuery::default()
    })
    .unwrap();
    assert_eq!(residents.status, Some(ResidentStatus::Discharged));

    assert!(
        ResidentFilter::try_from(ResidentQuery {
            ancd: Some("A001".to_owned()),
            status: Some("5".to_owned()),
            ..ResidentQuery::default()
        })
        .is_err()
    );
}

#[test]
fn assessment_items_accept_object_or_text() {
    let as_object: AssessmentBody = body(json!({
        "ANCD": "A001", "PNUM": 1, "ASDT": "2024-05-01", "ASTYP": "ADL",
        "ITEMS": {"bathing": 2, "eating": 1}
    }));
    let as_text: AssessmentBody = body(json!({
        "ANCD": "A001", "PNUM": 1, "ASDT": "2024-05-01", "ASTYP": "ADL",
        "ITEMS": "{\"bathing\":2,\"eating\":1}"
    }));

    let a = Assessment::try_from(as_object).unwrap();
    let b = Assessment::try_from(as_text).unwrap();
    let parse = |s: &Option<String>| -> serde_json::Value {
        serde_json::from_str(s.as_deref().unwrap()).unwrap()
    };
    assert_eq!(parse(&a.items), parse(&b.items));

    let row = AssessmentRow::from(a);
    assert_eq!(row.items, Some(json!({"bathing": 2, "eating": 1})));
}

#[test]
fn contract_update_requires_the_insert_timestamp() {
    let without: ContractBody = body(json!({"ANCD": "A001", "PNUM": 3}));
    assert!(matches!(
        without.into_contract(),
        Err(DomainError::MissingParameter { name: "INDT" })
    ));

    let with: ContractBody = body(json!({
        "ANCD": "A001", "PNUM": 3, "INDT": "2024-05-01T09:00:00.123", "MAMT": 1500000
    }));
    let contract = with.into_contract().unwrap();
    assert_eq!(contract.inserted_at.nanosecond(), 123_000_000);
    assert_eq!(contract.monthly_amount, Some(1_500_000));
}

#[test]
fn rows_use_column_names() {
    let row = EmployeeRow::from(Employee {
        ancd: "A001".to_owned(),
        empno: "E01".to_owned(),
        name: "김직원".to_owned(),
        birth_date: None,
        sex: None,
        job_code: Some("N".to_owned()),
        phone: None,
        hired_on: NaiveDate::from_ymd_opt(2020, 3, 2),
        retired_on: None,
        remark: None,
    });

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["EMPNM"], "김직원");
    assert_eq!(value["JOBCD"], "N");
    assert_eq!(value["INDT"], "2020-03-02");
    assert!(value["OUTDT"].is_null());
}

#[test]
fn login_keeps_password_verbatim() {
    let req: LoginRequest = body(json!({"ancd": "A001", "uid": "nurse1", "password": " pw "}));
    let login = Login::try_from(req).unwrap();
    assert_eq!(login.password, " pw ");

    let req: LoginRequest = body(json!({"ancd": "A001", "uid": "nurse1"}));
    assert!(matches!(
        Login::try_from(req),
        Err(DomainError::MissingParameter { name: "password" })
    ));
}
