//! REST DTOs.
//!
//! Rows and JSON bodies use the facility column names (`EMPNO`, `P_NM`, ...).
//! Query strings use lowercase keys. Body fields accept strings or numbers so
//! that `"PNUM": 3` and `"PNUM": "3"` are equivalent; presence and format are
//! checked when converting into domain models, which turns a missing key
//! into `MissingParameter` (HTTP 400).

use carehome_sdk::{
    Assessment, AssessmentFilter, Attendance, AttendanceFilter, Consultation, ConsultationDraft,
    ConsultationFilter, Contract, ContractDraft, ContractKey, Employee, EmployeeFilter,
    EmploymentStatus, Resident, ResidentDraft, ResidentFilter, ResidentStatus, UserInfo,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::repos::AssessmentKey;
use crate::domain::validation::{
    optional, optional_date, optional_number, parse_date, required, required_date,
    required_number, required_timestamp,
};

/// Scalar body value as sent by browsers: text, number, flag or raw JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Json(Value),
}

impl Loose {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
            Self::Flag(b) => b.to_string(),
            Self::Json(v) => v.to_string(),
        }
    }
}

fn text(value: Option<Loose>) -> Option<String> {
    value.map(Loose::into_text)
}

fn optional_amount(name: &'static str, value: Option<Loose>) -> Result<Option<i64>, DomainError> {
    optional(text(value))
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| DomainError::validation(name, format!("'{raw}' is not an amount")))
        })
        .transpose()
}

// === Employees ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct EmployeeRow {
    pub ancd: String,
    pub empno: String,
    pub empnm: String,
    pub brdt: Option<NaiveDate>,
    pub sex: Option<String>,
    pub jobcd: Option<String>,
    pub hpno: Option<String>,
    pub indt: Option<NaiveDate>,
    pub outdt: Option<NaiveDate>,
    pub remark: Option<String>,
}

impl From<Employee> for EmployeeRow {
    fn from(e: Employee) -> Self {
        Self {
            ancd: e.ancd,
            empno: e.empno,
            empnm: e.name,
            brdt: e.birth_date,
            sex: e.sex,
            jobcd: e.job_code,
            hpno: e.phone,
            indt: e.hired_on,
            outdt: e.retired_on,
            remark: e.remark,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct EmployeeBody {
    pub ancd: Option<Loose>,
    pub empno: Option<Loose>,
    pub empnm: Option<Loose>,
    pub brdt: Option<Loose>,
    pub sex: Option<Loose>,
    pub jobcd: Option<Loose>,
    pub hpno: Option<Loose>,
    pub indt: Option<Loose>,
    pub outdt: Option<Loose>,
    pub remark: Option<Loose>,
}

impl TryFrom<EmployeeBody> for Employee {
    type Error = DomainError;

    fn try_from(b: EmployeeBody) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ANCD", text(b.ancd))?,
            empno: required("EMPNO", text(b.empno))?,
            name: required("EMPNM", text(b.empnm))?,
            birth_date: optional_date("BRDT", text(b.brdt))?,
            sex: optional(text(b.sex)),
            job_code: optional(text(b.jobcd)),
            phone: optional(text(b.hpno)),
            hired_on: optional_date("INDT", text(b.indt))?,
            retired_on: optional_date("OUTDT", text(b.outdt))?,
            remark: optional(text(b.remark)),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EmployeeQuery {
    pub ancd: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub jobcd: Option<String>,
}

impl TryFrom<EmployeeQuery> for EmployeeFilter {
    type Error = DomainError;

    fn try_from(q: EmployeeQuery) -> Result<Self, Self::Error> {
        let status = match optional(q.status).as_deref() {
            None => None,
            Some("active") => Some(EmploymentStatus::Active),
            Some("retired") => Some(EmploymentStatus::Retired),
            Some(other) => {
                return Err(DomainError::validation(
                    "status",
                    format!("'{other}' is neither 'active' nor 'retired'"),
                ));
            }
        };
        Ok(Self {
            ancd: required("ancd", q.ancd)?,
            name: optional(q.name),
            status,
            job_code: optional(q.jobcd),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EmployeeKeyQuery {
    pub ancd: Option<String>,
    pub empno: Option<String>,
}

impl EmployeeKeyQuery {
    pub fn into_key(self) -> Result<(String, String), DomainError> {
        Ok((required("ancd", self.ancd)?, required("empno", self.empno)?))
    }
}

// === Residents ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ResidentRow {
    pub ancd: String,
    pub pnum: i32,
    pub p_nm: String,
    pub p_sex: Option<String>,
    pub p_brdt: Option<NaiveDate>,
    pub p_grd: Option<String>,
    pub p_st: Option<String>,
    pub indt: Option<NaiveDate>,
    pub outdt: Option<NaiveDate>,
    pub gnm: Option<String>,
    pub gtel: Option<String>,
    pub grel: Option<String>,
    pub addr: Option<String>,
    pub remark: Option<String>,
}

impl From<Resident> for ResidentRow {
    fn from(r: Resident) -> Self {
        Self {
            ancd: r.ancd,
            pnum: r.pnum,
            p_nm: r.name,
            p_sex: r.sex,
            p_brdt: r.birth_date,
            p_grd: r.grade,
            p_st: r.status,
            indt: r.admitted_on,
            outdt: r.discharged_on,
            gnm: r.guardian_name,
            gtel: r.guardian_phone,
            grel: r.guardian_relation,
            addr: r.address,
            remark: r.remark,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ResidentBody {
    pub ancd: Option<Loose>,
    pub pnum: Option<Loose>,
    pub p_nm: Option<Loose>,
    pub p_sex: Option<Loose>,
    pub p_brdt: Option<Loose>,
    pub p_grd: Option<Loose>,
    pub p_st: Option<Loose>,
    pub indt: Option<Loose>,
    pub outdt: Option<Loose>,
    pub gnm: Option<Loose>,
    pub gtel: Option<Loose>,
    pub grel: Option<Loose>,
    pub addr: Option<Loose>,
    pub remark: Option<Loose>,
}

impl ResidentBody {
    /// Fields for a new resident; any supplied `PNUM` is ignored.
    pub fn into_draft(self) -> Result<ResidentDraft, DomainError> {
        Ok(ResidentDraft {
            ancd: required("ANCD", text(self.ancd))?,
            name: required("P_NM", text(self.p_nm))?,
            sex: optional(text(self.p_sex)),
            birth_date: optional_date("P_BRDT", text(self.p_brdt))?,
            grade: optional(text(self.p_grd)),
            status: optional(text(self.p_st)),
            admitted_on: optional_date("INDT", text(self.indt))?,
            discharged_on: optional_date("OUTDT", text(self.outdt))?,
            guardian_name: optional(text(self.gnm)),
            guardian_phone: optional(text(self.gtel)),
            guardian_relation: optional(text(self.grel)),
            address: optional(text(self.addr)),
            remark: optional(text(self.remark)),
        })
    }

    pub fn into_resident(mut self) -> Result<Resident, DomainError> {
        let pnum = self.pnum.take();
        let draft = self.into_draft()?;
        Ok(draft.into_resident(required_number("PNUM", text(pnum))?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResidentQuery {
    pub ancd: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub grade: Option<String>,
}

impl TryFrom<ResidentQuery> for ResidentFilter {
    type Error = DomainError;

    fn try_from(q: ResidentQuery) -> Result<Self, Self::Error> {
        let status = optional(q.status)
            .map(|raw| {
                ResidentStatus::from_code(&raw).ok_or_else(|| {
                    DomainError::validation("status", format!("unknown status code '{raw}'"))
                })
            })
            .transpose()?;
        Ok(Self {
            ancd: required("ancd", q.ancd)?,
            name: optional(q.name),
            status,
            grade: optional(q.grade),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResidentKeyQuery {
    pub ancd: Option<String>,
    pub pnum: Option<String>,
}

impl ResidentKeyQuery {
    pub fn into_key(self) -> Result<(String, i32), DomainError> {
        Ok((
            required("ancd", self.ancd)?,
            required_number("pnum", self.pnum)?,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub ancd: Option<String>,
    pub q: Option<String>,
}

// === Attendance ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AttendanceRow {
    pub ancd: String,
    pub empno: String,
    pub wdt: NaiveDate,
    pub sttm: Option<String>,
    pub edtm: Option<String>,
    pub wktyp: Option<String>,
    pub remark: Option<String>,
}

impl From<Attendance> for AttendanceRow {
    fn from(a: Attendance) -> Self {
        Self {
            ancd: a.ancd,
            empno: a.empno,
            wdt: a.work_date,
            sttm: a.start_time,
            edtm: a.end_time,
            wktyp: a.work_type,
            remark: a.remark,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AttendanceBody {
    pub ancd: Option<Loose>,
    pub empno: Option<Loose>,
    pub wdt: Option<Loose>,
    pub sttm: Option<Loose>,
    pub edtm: Option<Loose>,
    pub wktyp: Option<Loose>,
    pub remark: Option<Loose>,
}

impl TryFrom<AttendanceBody> for Attendance {
    type Error = DomainError;

    fn try_from(b: AttendanceBody) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ANCD", text(b.ancd))?,
            empno: required("EMPNO", text(b.empno))?,
            work_date: required_date("WDT", text(b.wdt))?,
            start_time: optional(text(b.sttm)),
            end_time: optional(text(b.edtm)),
            work_type: optional(text(b.wktyp)),
            remark: optional(text(b.remark)),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AttendanceQuery {
    pub ancd: Option<String>,
    pub empno: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl TryFrom<AttendanceQuery> for AttendanceFilter {
    type Error = DomainError;

    fn try_from(q: AttendanceQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ancd", q.ancd)?,
            empno: optional(q.empno),
            from: optional_date("from", q.from)?,
            to: optional_date("to", q.to)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AttendanceKeyQuery {
    pub ancd: Option<String>,
    pub empno: Option<String>,
    pub wdt: Option<String>,
}

impl AttendanceKeyQuery {
    pub fn into_key(self) -> Result<(String, String, NaiveDate), DomainError> {
        Ok((
            required("ancd", self.ancd)?,
            required("empno", self.empno)?,
            required_date("wdt", self.wdt)?,
        ))
    }
}

// === Contracts ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ContractRow {
    pub ancd: String,
    pub pnum: i32,
    pub indt: NaiveDateTime,
    pub ctsdt: Option<NaiveDate>,
    pub ctedt: Option<NaiveDate>,
    pub p_grd: Option<String>,
    pub svtyp: Option<String>,
    pub mamt: Option<i64>,
    pub remark: Option<String>,
}

impl From<Contract> for ContractRow {
    fn from(c: Contract) -> Self {
        Self {
            ancd: c.ancd,
            pnum: c.pnum,
            indt: c.inserted_at,
            ctsdt: c.start_date,
            ctedt: c.end_date,
            p_grd: c.grade,
            svtyp: c.service_type,
            mamt: c.monthly_amount,
            remark: c.remark,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ContractBody {
    pub ancd: Option<Loose>,
    pub pnum: Option<Loose>,
    pub indt: Option<Loose>,
    pub ctsdt: Option<Loose>,
    pub ctedt: Option<Loose>,
    pub p_grd: Option<Loose>,
    pub svtyp: Option<Loose>,
    pub mamt: Option<Loose>,
    pub remark: Option<Loose>,
}

impl ContractBody {
    /// New contract; `INDT` is assigned by the server.
    pub fn into_draft(self) -> Result<ContractDraft, DomainError> {
        Ok(ContractDraft {
            ancd: required("ANCD", text(self.ancd))?,
            pnum: required_number("PNUM", text(self.pnum))?,
            start_date: optional_date("CTSDT", text(self.ctsdt))?,
            end_date: optional_date("CTEDT", text(self.ctedt))?,
            grade: optional(text(self.p_grd)),
            service_type: optional(text(self.svtyp)),
            monthly_amount: optional_amount("MAMT", self.mamt)?,
            remark: optional(text(self.remark)),
        })
    }

    pub fn into_contract(mut self) -> Result<Contract, DomainError> {
        let indt = self.indt.take();
        let draft = self.into_draft()?;
        let inserted_at = required_timestamp("INDT", text(indt))?;
        Ok(draft.into_contract(inserted_at))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContractQuery {
    pub ancd: Option<String>,
    pub pnum: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContractKeyQuery {
    pub ancd: Option<String>,
    pub pnum: Option<String>,
    pub indt: Option<String>,
}

impl TryFrom<ContractKeyQuery> for ContractKey {
    type Error = DomainError;

    fn try_from(q: ContractKeyQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ancd", q.ancd)?,
            pnum: required_number("pnum", q.pnum)?,
            inserted_at: required_timestamp("indt", q.indt)?,
        })
    }
}

impl ContractQuery {
    pub fn into_filter(self) -> Result<(String, Option<i32>), DomainError> {
        Ok((
            required("ancd", self.ancd)?,
            optional_number("pnum", self.pnum)?,
        ))
    }
}

// === Consultations ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ConsultationRow {
    pub ancd: String,
    pub pnum: i32,
    pub csnum: i32,
    pub csdt: NaiveDate,
    pub cstyp: Option<String>,
    pub empno: Option<String>,
    pub cscont: Option<String>,
    pub csrslt: Option<String>,
}

impl From<Consultation> for ConsultationRow {
    fn from(c: Consultation) -> Self {
        Self {
            ancd: c.ancd,
            pnum: c.pnum,
            csnum: c.csnum,
            csdt: c.date,
            cstyp: c.kind,
            empno: c.empno,
            cscont: c.content,
            csrslt: c.result,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ConsultationBody {
    pub ancd: Option<Loose>,
    pub pnum: Option<Loose>,
    pub csnum: Option<Loose>,
    pub csdt: Option<Loose>,
    pub cstyp: Option<Loose>,
    pub empno: Option<Loose>,
    pub cscont: Option<Loose>,
    pub csrslt: Option<Loose>,
}

impl ConsultationBody {
    /// New entry; `CSNUM` is assigned on insert.
    pub fn into_draft(self) -> Result<ConsultationDraft, DomainError> {
        Ok(ConsultationDraft {
            ancd: required("ANCD", text(self.ancd))?,
            pnum: required_number("PNUM", text(self.pnum))?,
            date: required_date("CSDT", text(self.csdt))?,
            kind: optional(text(self.cstyp)),
            empno: optional(text(self.empno)),
            content: optional(text(self.cscont)),
            result: optional(text(self.csrslt)),
        })
    }

    pub fn into_consultation(mut self) -> Result<Consultation, DomainError> {
        let csnum = self.csnum.take();
        let draft = self.into_draft()?;
        let csnum = required_number("CSNUM", text(csnum))?;
        Ok(draft.into_consultation(csnum))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConsultationQuery {
    pub ancd: Option<String>,
    pub pnum: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl TryFrom<ConsultationQuery> for ConsultationFilter {
    type Error = DomainError;

    fn try_from(q: ConsultationQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ancd", q.ancd)?,
            pnum: optional_number("pnum", q.pnum)?,
            from: optional_date("from", q.from)?,
            to: optional_date("to", q.to)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConsultationKeyQuery {
    pub ancd: Option<String>,
    pub pnum: Option<String>,
    pub csnum: Option<String>,
}

impl ConsultationKeyQuery {
    pub fn into_key(self) -> Result<(String, i32, i32), DomainError> {
        Ok((
            required("ancd", self.ancd)?,
            required_number("pnum", self.pnum)?,
            required_number("csnum", self.csnum)?,
        ))
    }
}

// === Assessments ===

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AssessmentRow {
    pub ancd: String,
    pub pnum: i32,
    pub asdt: NaiveDate,
    pub astyp: String,
    pub empno: Option<String>,
    pub score: Option<i32>,
    /// Stored text parsed back into JSON.
    pub items: Option<Value>,
    pub remark: Option<String>,
}

impl From<Assessment> for AssessmentRow {
    fn from(a: Assessment) -> Self {
        let items = a
            .items
            .map(|raw| serde_json::from_str(&raw).unwrap_or(Value::String(raw)));
        Self {
            ancd: a.ancd,
            pnum: a.pnum,
            asdt: a.date,
            astyp: a.form_type,
            empno: a.empno,
            score: a.score,
            items,
            remark: a.remark,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AssessmentBody {
    pub ancd: Option<Loose>,
    pub pnum: Option<Loose>,
    pub asdt: Option<Loose>,
    pub astyp: Option<Loose>,
    pub empno: Option<Loose>,
    pub score: Option<Loose>,
    /// JSON object/array, or the same serialized as a string.
    pub items: Option<Loose>,
    pub remark: Option<Loose>,
}

impl TryFrom<AssessmentBody> for Assessment {
    type Error = DomainError;

    fn try_from(b: AssessmentBody) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ANCD", text(b.ancd))?,
            pnum: required_number("PNUM", text(b.pnum))?,
            date: required_date("ASDT", text(b.asdt))?,
            form_type: required("ASTYP", text(b.astyp))?,
            empno: optional(text(b.empno)),
            score: optional_number("SCORE", text(b.score))?,
            items: optional(text(b.items)),
            remark: optional(text(b.remark)),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AssessmentQuery {
    pub ancd: Option<String>,
    pub pnum: Option<String>,
    pub astyp: Option<String>,
}

impl TryFrom<AssessmentQuery> for AssessmentFilter {
    type Error = DomainError;

    fn try_from(q: AssessmentQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ancd", q.ancd)?,
            pnum: optional_number("pnum", q.pnum)?,
            form_type: optional(q.astyp),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AssessmentKeyQuery {
    pub ancd: Option<String>,
    pub pnum: Option<String>,
    pub asdt: Option<String>,
    pub astyp: Option<String>,
}

impl TryFrom<AssessmentKeyQuery> for AssessmentKey {
    type Error = DomainError;

    fn try_from(q: AssessmentKeyQuery) -> Result<Self, Self::Error> {
        let ancd = required("ancd", q.ancd)?;
        let pnum = required_number("pnum", q.pnum)?;
        let date = parse_date("asdt", &required("asdt", q.asdt)?)?;
        Ok(Self {
            ancd,
            pnum,
            date,
            form_type: required("astyp", q.astyp)?,
        })
    }
}

// === Auth ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct UserRow {
    pub ancd: String,
    pub uid: String,
    pub usrnm: Option<String>,
    pub empno: Option<String>,
    pub email: Option<String>,
    pub usrlvl: Option<String>,
}

impl From<UserInfo> for UserRow {
    fn from(u: UserInfo) -> Self {
        Self {
            ancd: u.ancd,
            uid: u.uid,
            usrnm: u.name,
            empno: u.empno,
            email: u.email,
            usrlvl: u.level,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub ancd: Option<Loose>,
    pub uid: Option<Loose>,
    pub password: Option<Loose>,
}

/// Validated login fields.
pub struct Login {
    pub ancd: String,
    pub uid: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for Login {
    type Error = DomainError;

    fn try_from(r: LoginRequest) -> Result<Self, Self::Error> {
        let password = text(r.password).filter(|p| !p.is_empty());
        Ok(Self {
            ancd: required("ancd", text(r.ancd))?,
            uid: required("uid", text(r.uid))?,
            // Passwords are compared verbatim, never trimmed
            password: password.ok_or_else(|| DomainError::missing("password"))?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SendCodeRequest {
    pub ancd: Option<Loose>,
    pub uid: Option<Loose>,
    pub email: Option<Loose>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VerifyCodeRequest {
    pub ancd: Option<Loose>,
    pub uid: Option<Loose>,
    pub email: Option<Loose>,
    pub code: Option<Loose>,
}

/// Validated reset-flow identity.
pub struct ResetTarget {
    pub ancd: String,
    pub uid: String,
    pub email: String,
}

impl TryFrom<SendCodeRequest> for ResetTarget {
    type Error = DomainError;

    fn try_from(r: SendCodeRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            ancd: required("ancd", text(r.ancd))?,
            uid: required("uid", text(r.uid))?,
            email: required("email", text(r.email))?,
        })
    }
}

impl VerifyCodeRequest {
    pub fn into_parts(self) -> Result<(ResetTarget, String), DomainError> {
        let code = required("code", text(self.code))?;
        let target = ResetTarget::try_from(SendCodeRequest {
            ancd: self.ancd,
            uid: self.uid,
            email: self.email,
        })?;
        Ok((target, code))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveredPassword {
    pub password: String,
}
