// src/specs/results.rs

/// How a column finds its value in one result record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Single source key.
    Key(&'static str),
    /// First key that is present and not null.
    FirstOf(&'static [&'static str]),
}

impl Lookup {
    pub fn keys(&self) -> &[&'static str] {
        match self {
            Lookup::Key(k) => std::slice::from_ref(k),
            Lookup::FirstOf(ks) => ks,
        }
    }
}

/// What a column means to the reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Plain,
    Date,
    Medal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub lookup: Lookup,
    pub role: Role,
}

const fn field(label: &'static str, key: &'static str) -> FieldSpec {
    FieldSpec { label, lookup: Lookup::Key(key), role: Role::Plain }
}

const fn with_role(mut f: FieldSpec, role: Role) -> FieldSpec {
    f.role = role;
    f
}

/// Ordered column list for one output table.
#[derive(Debug, PartialEq, Eq)]
pub struct Projection {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Projection {
    pub fn headers(&self) -> Vec<String> {
        self.fields.iter().map(|f| s!(f.label)).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column index of the first field with `role`.
    pub fn column_of(&self, role: Role) -> Option<usize> {
        self.fields.iter().position(|f| f.role == role)
    }
}

/// Club name, else national-team code.
pub const TEAM_KEYS: &[&str] = &["ClubName", "NAT"];

/// Network pipeline columns.
pub static FULL: Projection = Projection {
    name: "full",
    fields: &[
        field("比赛名称", "CompetitionName"),
        field("比赛类型", "CompetitionType"),
        field("项目", "DisciplineName"),
        field("阶段", "PhaseName"),
        field("排名", "Rank"),
        with_role(field("奖牌", "MedalTag"), Role::Medal),
        field("时间", "Time"),
        with_role(field("日期", "Date"), Role::Date),
        field("城市", "CompetitionCity"),
        field("国家", "CompetitionCountry"),
        FieldSpec { label: "俱乐部/国家队", lookup: Lookup::FirstOf(TEAM_KEYS), role: Role::Plain },
        field("记录类型", "RecordType"),
        field("分数", "Points"),
        field("年龄", "AthleteResultAge"),
    ],
};

/// Archive replay columns.
pub static MINIMAL: Projection = Projection {
    name: "minimal",
    fields: &[
        field("名次", "Rank"),
        field("比赛项目", "DisciplineName"),
        field("比赛用时", "Time"),
        field("赛事", "CompetitionName"),
        with_role(field("比赛时间", "Date"), Role::Date),
    ],
};
