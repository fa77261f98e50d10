//! Public models for the carehome module.
//!
//! These are transport-agnostic data structures. Wire naming (the legacy
//! column names such as `EMPNO` or `P_NM`) lives in the REST layer.

use chrono::{NaiveDate, NaiveDateTime};

/// Staff member of a facility (`ANCD` + `EMPNO`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub ancd: String,
    pub empno: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub job_code: Option<String>,
    pub phone: Option<String>,
    pub hired_on: Option<NaiveDate>,
    pub retired_on: Option<NaiveDate>,
    pub remark: Option<String>,
}

/// Employment state derived from the retirement date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Active,
    Retired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub ancd: String,
    pub name: Option<String>,
    pub status: Option<EmploymentStatus>,
    pub job_code: Option<String>,
}

/// Admission state stored in `P_ST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidentStatus {
    InCare,
    Discharged,
}

impl ResidentStatus {
    /// Column code persisted for this state.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::InCare => "1",
            Self::Discharged => "9",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::InCare),
            "9" => Some(Self::Discharged),
            _ => None,
        }
    }
}

/// Care recipient (`ANCD` + `PNUM`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resident {
    pub ancd: String,
    pub pnum: i32,
    pub name: String,
    pub sex: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub grade: Option<String>,
    pub status: Option<String>,
    pub admitted_on: Option<NaiveDate>,
    pub discharged_on: Option<NaiveDate>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_relation: Option<String>,
    pub address: Option<String>,
    pub remark: Option<String>,
}

/// Resident fields supplied by the caller; `pnum` is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResidentDraft {
    pub ancd: String,
    pub name: String,
    pub sex: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub grade: Option<String>,
    pub status: Option<String>,
    pub admitted_on: Option<NaiveDate>,
    pub discharged_on: Option<NaiveDate>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_relation: Option<String>,
    pub address: Option<String>,
    pub remark: Option<String>,
}

impl ResidentDraft {
    #[must_use]
    pub fn into_resident(self, pnum: i32) -> Resident {
        Resident {
            ancd: self.ancd,
            pnum,
            name: self.name,
            sex: self.sex,
            birth_date: self.birth_date,
            grade: self.grade,
            status: self.status,
            admitted_on: self.admitted_on,
            discharged_on: self.discharged_on,
            guardian_name: self.guardian_name,
            guardian_phone: self.guardian_phone,
            guardian_relation: self.guardian_relation,
            address: self.address,
            remark: self.remark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentFilter {
    pub ancd: String,
    pub name: Option<String>,
    pub status: Option<ResidentStatus>,
    pub grade: Option<String>,
}

/// One row per employee per work date (`ANCD` + `EMPNO` + `WDT`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub ancd: String,
    pub empno: String,
    pub work_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub work_type: Option<String>,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub ancd: String,
    pub empno: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Service agreement. `inserted_at` doubles as the row identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub ancd: String,
    pub pnum: i32,
    pub inserted_at: NaiveDateTime,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub grade: Option<String>,
    pub service_type: Option<String>,
    pub monthly_amount: Option<i64>,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractDraft {
    pub ancd: String,
    pub pnum: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub grade: Option<String>,
    pub service_type: Option<String>,
    pub monthly_amount: Option<i64>,
    pub remark: Option<String>,
}

impl ContractDraft {
    #[must_use]
    pub fn into_contract(self, inserted_at: NaiveDateTime) -> Contract {
        Contract {
            ancd: self.ancd,
            pnum: self.pnum,
            inserted_at,
            start_date: self.start_date,
            end_date: self.end_date,
            grade: self.grade,
            service_type: self.service_type,
            monthly_amount: self.monthly_amount,
            remark: self.remark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractKey {
    pub ancd: String,
    pub pnum: i32,
    pub inserted_at: NaiveDateTime,
}

/// Counseling log entry (`ANCD` + `PNUM` + `CSNUM`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub ancd: String,
    pub pnum: i32,
    pub csnum: i32,
    pub date: NaiveDate,
    pub kind: Option<String>,
    pub empno: Option<String>,
    pub content: Option<String>,
    pub result: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationDraft {
    pub ancd: String,
    pub pnum: i32,
    pub date: NaiveDate,
    pub kind: Option<String>,
    pub empno: Option<String>,
    pub content: Option<String>,
    pub result: Option<String>,
}

impl ConsultationDraft {
    #[must_use]
    pub fn into_consultation(self, csnum: i32) -> Consultation {
        Consultation {
            ancd: self.ancd,
            pnum: self.pnum,
            csnum,
            date: self.date,
            kind: self.kind,
            empno: self.empno,
            content: self.content,
            result: self.result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationFilter {
    pub ancd: String,
    pub pnum: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Care-assessment form (`ANCD` + `PNUM` + `ASDT` + `ASTYP`).
///
/// `items` holds the form answers as JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub ancd: String,
    pub pnum: i32,
    pub date: NaiveDate,
    pub form_type: String,
    pub empno: Option<String>,
    pub score: Option<i32>,
    pub items: Option<String>,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentFilter {
    pub ancd: String,
    pub pnum: Option<i32>,
    pub form_type: Option<String>,
}

/// Non-sensitive account fields returned after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub ancd: String,
    pub uid: String,
    pub name: Option<String>,
    pub empno: Option<String>,
    pub email: Option<String>,
    pub level: Option<String>,
}
