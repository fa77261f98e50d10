//! `SeaORM` entities for the facility tables.
//!
//! Table and column names are the facility database's own (`F10010.P_NM`
//! and friends); Rust field names are their lowercase forms.

pub use assessment::Entity as AssessmentEntity;
pub use attendance::Entity as AttendanceEntity;
pub use consultation::Entity as ConsultationEntity;
pub use contract::Entity as ContractEntity;
pub use credential::Entity as CredentialEntity;
pub use employee::Entity as EmployeeEntity;
pub use resident::Entity as ResidentEntity;

/// Login accounts (`F00110`).
pub mod credential {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "F00110")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ANCD")]
        pub ancd: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "UID")]
        pub uid: String,
        #[sea_orm(column_name = "PWD")]
        pub pwd: String,
        #[sea_orm(column_name = "USRNM")]
        pub usrnm: Option<String>,
        #[sea_orm(column_name = "EMPNO")]
        pub empno: Option<String>,
        #[sea_orm(column_name = "EMAIL")]
        pub email: Option<String>,
        #[sea_orm(column_name = "USRLVL")]
        pub usrlvl: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Staff (`F01010`).
pub mod employee {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "F01010")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ANCD")]
        pub ancd: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "EMPNO")]
        pub empno: String,
        #[sea_orm(column_name = "EMPNM")]
        pub empnm: String,
        #[sea_orm(column_name = "BRDT")]
        pub brdt: Option<Date>,
        #[sea_orm(column_name = "SEX")]
        pub sex: Option<String>,
        #[sea_orm(column_name = "JOBCD")]
        pub jobcd: Option<String>,
        #[sea_orm(column_name = "HPNO")]
        pub hpno: Option<String>,
        #[sea_orm(column_name = "INDT")]
        pub indt: Option<Date>,
        #[sea_orm(column_name = "OUTDT")]
        pub outdt: Option<Date>,
        #[sea_orm(column_name = "REMARK")]
        pub remark: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Daily attendance (`F01030`).
pub mod attendance {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "F01030")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ANCD")]
        pub ancd: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "EMPNO")]
        pub empno: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "WDT")]
        pub wdt: Date,
        #[sea_orm(column_name = "STTM")]
        pub sttm: Option<String>,
        #[sea_orm(column_name = "EDTM")]
        pub edtm: Option<String>,
        #[sea_orm(column_name = "WKTYP")]
        pub wktyp: Option<String>,
        #[sea_orm(column_name = "REMARK")]
        pub remark: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Care recipients (`F10010`).
pub mod resident {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "F10010")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ANCD")]
        pub ancd: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "PNUM")]
        pub pnum: i32,
        #[sea_orm(column_name = "P_NM")]
        pub p_nm: String,
        #[sea_orm(column_name = "P_SEX")]
        pub p_sex: Option<String>,
        #[sea_orm(column_name = "P_BRDT")]
        pub p_brdt: Option<Date>,
        #[sea_orm(column_name = "P_GRD")]
        pub p_grd: Option<String>,
        #[sea_orm(column_name = "P_ST")]
        pub p_st: Option<String>,
        #[sea_orm(column_name = "INDT")]
        pub indt: Option<Date>,
        #[sea_orm(column_name = "OUTDT")]
        pub outdt: Option<Date>,
        #[sea_orm(column_name = "GNM")]
        pub gnm: Option<String>,
        #[sea_orm(column_name = "GTEL")]
        pub gtel: Option<String>,
        #[sea_orm(column_name = "GREL")]
        pub grel: Option<String>,
        #[sea_orm(column_name = "ADDR")]
        pub addr: Option<String>,
        #[sea_orm(column_name = "REMARK")]
        pub remark: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Service agreements (`F10020`). `INDT` is the row identifier.
pub mod contract {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "F10020")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ANCD")]
        pub ancd: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "PNUM")]
        pub pnum: i32,
        #[sea_orm(primary_key, auto_increment = false, column_name = "INDT")]
        pub indt: DateTime,
        #[sea_orm(column_name = "CTSDT")]
        pub ctsdt: Option<Date>,
        #[sea_orm(column_name = "CTEDT")]
        pub ctedt: Option<Date>,
        #[sea_orm(column_name = "P_GRD")]
        pub p_grd: Option<String>,
        #[sea_orm(column_name = "SVTYP")]
        pub svtyp: Option<String>,
        #[sea_orm(column_name = "MAMT")]
        pub mamt: Option<i64>,
        #[sea_orm(column_name = "REMARK")]
        pub remark: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Counseling logs (`F10030`).
pub mod consultation {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "F10030")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ANCD")]
        pub ancd: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "PNUM")]
        pub pnum: i32,
        #[sea_orm(primary_key, auto_increment = false, column_name = "CSNUM")]
        pub csnum: i32,
        #[sea_orm(column_name = "CSDT")]
        pub csdt: Date,
        #[sea_orm(column_name = "CSTYP")]
        pub cstyp: Option<String>,
        #[sea_orm(column_name = "EMPNO")]
        pub empno: Option<String>,
        #[sea_orm(column_name = "CSCONT", column_type = "Text", nullable)]
        pub cscont: Option<String>,
        #[sea_orm(column_name = "CSRSLT", column_type = "Text", nullable)]
        pub csrslt: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Care-assessment forms (`F10040`).
pub mod assessment {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "F10040")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "ANCD")]
        pub ancd: String,
        #[sea_orm(primary_key, auto_increment = false, column_name = "PNUM")]
        pub pnum: i32,
        #[sea_orm(primary_key, auto_increment = false, column_name = "ASDT")]
        pub asdt: Date,
        #[sea_orm(primary_key, auto_increment = false, column_name = "ASTYP")]
        pub astyp: String,
        #[sea_orm(column_name = "EMPNO")]
        pub empno: Option<String>,
        #[sea_orm(column_name = "SCORE")]
        pub score: Option<i32>,
        #[sea_orm(column_name = "ITEMS", column_type = "Text", nullable)]
        pub items: Option<String>,
        #[sea_orm(column_name = "REMARK")]
        pub remark: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
