//! Entity <-> domain model conversions.

use carehome_sdk::{Assessment, Attendance, Consultation, Contract, Employee, Resident, UserInfo};
use sea_orm::ActiveValue::Set;

use super::entity::{assessment, attendance, consultation, contract, credential, employee, resident};
use crate::domain::repos::StoredCredential;

impl From<credential::Model> for StoredCredential {
    fn from(model: credential::Model) -> Self {
        Self {
            user: UserInfo {
                ancd: model.ancd,
                uid: model.uid,
                name: model.usrnm,
                empno: model.empno,
                email: model.email,
                level: model.usrlvl,
            },
            password: model.pwd,
        }
    }
}

impl From<employee::Model> for Employee {
    fn from(model: employee::Model) -> Self {
        Self {
            ancd: model.ancd,
            empno: model.empno,
            name: model.empnm,
            birth_date: model.brdt,
            sex: model.sex,
            job_code: model.jobcd,
            phone: model.hpno,
            hired_on: model.indt,
            retired_on: model.outdt,
            remark: model.remark,
        }
    }
}

pub fn employee_to_active_model(e: Employee) -> employee::ActiveModel {
    employee::ActiveModel {
        ancd: Set(e.ancd),
        empno: Set(e.empno),
        empnm: Set(e.name),
        brdt: Set(e.birth_date),
        sex: Set(e.sex),
        jobcd: Set(e.job_code),
        hpno: Set(e.phone),
        indt: Set(e.hired_on),
        outdt: Set(e.retired_on),
        remark: Set(e.remark),
    }
}

impl From<attendance::Model> for Attendance {
    fn from(model: attendance::Model) -> Self {
        Self {
            ancd: model.ancd,
            empno: model.empno,
            work_date: model.wdt,
            start_time: model.sttm,
            end_time: model.edtm,
            work_type: model.wktyp,
            remark: model.remark,
        }
    }
}

pub fn attendance_to_active_model(a: Attendance) -> attendance::ActiveModel {
    attendance::ActiveModel {
        ancd: Set(a.ancd),
        empno: Set(a.empno),
        wdt: Set(a.work_date),
        sttm: Set(a.start_time),
        edtm: Set(a.end_time),
        wktyp: Set(a.work_type),
        remark: Set(a.remark),
    }
}

impl From<resident::Model> for Resident {
    fn from(model: resident::Model) -> Self {
        Self {
            ancd: model.ancd,
            pnum: model.pnum,
            name: model.p_nm,
            sex: model.p_sex,
            birth_date: model.p_brdt,
            grade: model.p_grd,
            status: model.p_st,
            admitted_on: model.indt,
            discharged_on: model.outdt,
            guardian_name: model.gnm,
            guardian_phone: model.gtel,
            guardian_relation: model.grel,
            address: model.addr,
            remark: model.remark,
        }
    }
}

pub fn resident_to_active_model(r: Resident) -> resident::ActiveModel {
    resident::ActiveModel {
        ancd: Set(r.ancd),
        pnum: Set(r.pnum),
        p_nm: Set(r.name),
        p_sex: Set(r.sex),
        p_brdt: Set(r.birth_date),
        p_grd: Set(r.grade),
        p_st: Set(r.status),
        indt: Set(r.admitted_on),
        outdt: Set(r.discharged_on),
        gnm: Set(r.guardian_name),
        gtel: Set(r.guardian_phone),
        grel: Set(r.guardian_relation),
        addr: Set(r.address),
        remark: Set(r.remark),
    }
}

impl From<contract::Model> for Contract {
    fn from(model: contract::Model) -> Self {
        Self {
            ancd: model.ancd,
            pnum: model.pnum,
            inserted_at: model.indt,
            start_date: model.ctsdt,
            end_date: model.ctedt,
            grade: model.p_grd,
            service_type: model.svtyp,
            monthly_amount: model.mamt,
            remark: model.remark,
        }
    }
}

pub fn contract_to_active_model(c: Contract) -> contract::ActiveModel {
    contract::ActiveModel {
        ancd: Set(c.ancd),
        pnum: Set(c.pnum),
        indt: Set(c.inserted_at),
        ctsdt: Set(c.start_date),
        ctedt: Set(c.end_date),
        p_grd: Set(c.grade),
        svtyp: Set(c.service_type),
        mamt: Set(c.monthly_amount),
        remark: Set(c.remark),
    }
}

impl From<consultation::Model> for Consultation {
    fn from(model: consultation::Model) -> Self {
        Self {
            ancd: model.ancd,
            pnum: model.pnum,
            csnum: model.csnum,
            date: model.csdt,
            kind: model.cstyp,
            empno: model.empno,
            content: model.cscont,
            result: model.csrslt,
        }
    }
}

pub fn consultation_to_active_model(c: Consultation) -> consultation::ActiveModel {
    consultation::ActiveModel {
        ancd: Set(c.ancd),
        pnum: Set(c.pnum),
        csnum: Set(c.csnum),
        csdt: Set(c.date),
        cstyp: Set(c.kind),
        empno: Set(c.empno),
        cscont: Set(c.content),
        csrslt: Set(c.result),
    }
}

impl From<assessment::Model> for Assessment {
    fn from(model: assessment::Model) -> Self {
        Self {
            ancd: model.ancd,
            pnum: model.pnum,
            date: model.asdt,
            form_type: model.astyp,
            empno: model.empno,
            score: model.score,
            items: model.items,
            remark: model.remark,
        }
    }
}

pub fn assessment_to_active_model(a: Assessment) -> assessment::ActiveModel {
    assessment::ActiveModel {
        ancd: Set(a.ancd),
        pnum: Set(a.pnum),
        asdt: Set(a.date),
        astyp: Set(a.form_type),
        empno: Set(a.empno),
        score: Set(a.score),
        items: Set(a.items),
        remark: Set(a.remark),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn credential_row_splits_password_from_user_fields() {
        let stored: StoredCredential = credential::Model {
            ancd: "A001".to_owned(),
            uid: "nurse1".to_owned(),
            pwd: "pw".to_owned(),
            usrnm: Some("김간호".to_owned()),
            empno: Some("E01".to_owned()),
            email: None,
            usrlvl: Some("2".to_owned()),
        }
        .into();

        assert_eq!(stored.password, "pw");
        assert_eq!(stored.user.level.as_deref(), Some("2"));
        assert!(!format!("{stored:?}").contains("\"pw\""));
    }

    #[test]
    fn resident_columns_map_to_named_fields() {
        let resident: Resident = resident::Model {
            ancd: "A001".to_owned(),
            pnum: 7,
            p_nm: "홍길동".to_owned(),
            p_sex: Some("M".to_owned()),
            p_brdt: NaiveDate::from_ymd_opt(1940, 2, 3),
            p_grd: Some("3".to_owned()),
            p_st: Some("1".to_owned()),
            indt: None,
            outdt: None,
            gnm: Some("홍보호".to_owned()),
            gtel: None,
            grel: Some("자녀".to_owned()),
            addr: None,
            remark: None,
        }
        .into();

        assert_eq!(resident.name, "홍길동");
        assert_eq!(resident.grade.as_deref(), Some("3"));
        assert_eq!(resident.guardian_relation.as_deref(), Some("자녀"));
    }
}
