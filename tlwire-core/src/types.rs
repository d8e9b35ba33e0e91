// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The object model: the closed set of typed schema objects, their
//! parameter descriptors, and the variant builders the registry dispatches
//! to.
//!
//! Every constructor the shipped schema knows is a [`TlObject`] variant, so
//! adding a constructor is a compile-time concern at every consumption
//! site. Presence of optional fields lives in the typed fields themselves
//! (`Option`, `bool`); flags words are recomputed from presence at
//! serialize time and are never stored.

use num_bigint::BigInt;

use crate::error::Error;
use crate::schema::{Entry, Param, ParamType};

/// A single decoded field value, produced by the generic deserializer and
/// consumed by a variant builder (and the reverse on the serialize path).
///
/// `Int128` and `Int256` are unsigned, `[0, 2^width)`; nonces and key
/// material use the full width with no sign. The primitive writer's
/// two's-complement wrap never surfaces at this layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Int128(BigInt),
    Int256(BigInt),
    Double(f64),
    Bytes(Vec<u8>),
    String(String),
    Bool(bool),
    Object(TlObject),
    Vector(Vec<Value>),
}

pub const CONFIG_ID: u32 = 0xcc1a241e;
pub const DC_OPTION_ID: u32 = 0x18b7a10d;
pub const MISSING_INVITEE_ID: u32 = 0x628c9224;
pub const RES_PQ_ID: u32 = 0x05162463;
pub const P_Q_INNER_DATA_DC_ID: u32 = 0xa9f55f95;
pub const GEO_POINT_EMPTY_ID: u32 = 0x1117dd5f;
pub const GEO_POINT_ID: u32 = 0xb2a2f663;

/// `dcOption#18b7a10d`
#[derive(Debug, Clone, PartialEq)]
pub struct DcOption {
    pub ipv6: bool,
    pub media_only: bool,
    pub tcpo_only: bool,
    pub cdn: bool,
    pub is_static: bool,
    pub this_port_only: bool,
    pub id: i32,
    pub ip_address: String,
    pub port: i32,
    pub secret: Option<Vec<u8>>,
}

/// `config#cc1a241e`
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_p2p_contacts: bool,
    pub preload_featured_stickers: bool,
    pub revoke_pm_inbox: bool,
    pub blocked_mode: bool,
    pub force_try_ipv6: bool,
    pub date: i32,
    pub expires: i32,
    pub test_mode: bool,
    pub this_dc: i32,
    pub dc_options: Vec<DcOption>,
    pub dc_txt_domain_name: String,
    pub chat_size_max: i32,
    pub megagroup_size_max: i32,
    pub forwarded_count_max: i32,
    pub online_update_period_ms: i32,
    pub offline_blur_timeout_ms: i32,
    pub offline_idle_timeout_ms: i32,
    pub online_cloud_timeout_ms: i32,
    pub notify_cloud_delay_ms: i32,
    pub notify_default_delay_ms: i32,
    pub push_chat_period_ms: i32,
    pub push_chat_limit: i32,
    pub edit_time_limit: i32,
    pub revoke_time_limit: i32,
    pub revoke_pm_time_limit: i32,
    pub rating_e_decay: i32,
    pub stickers_recent_limit: i32,
    pub channels_read_media_period: i32,
    pub tmp_sessions: Option<i32>,
    pub call_receive_timeout_ms: i32,
    pub call_ring_timeout_ms: i32,
    pub call_connect_timeout_ms: i32,
    pub call_packet_timeout_ms: i32,
    pub me_url_prefix: String,
    pub autoupdate_url_prefix: Option<String>,
    pub gif_search_username: Option<String>,
    pub venue_search_username: Option<String>,
    pub img_search_username: Option<String>,
    pub static_maps_provider: Option<String>,
    pub caption_length_max: i32,
    pub message_length_max: i32,
    pub webfile_dc_id: i32,
    pub suggested_lang_code: Option<String>,
    pub lang_pack_version: Option<i32>,
    pub base_lang_pack_version: Option<i32>,
    /// Boxed `Reaction` object.
    pub reactions_default: Option<Box<TlObject>>,
    pub autologin_token: Option<String>,
}

/// `missingInvitee#628c9224`
#[derive(Debug, Clone, PartialEq)]
pub struct MissingInvitee {
    pub premium_would_allow_invite: bool,
    pub premium_required_for_pm: bool,
    pub user_id: i64,
}

/// `resPQ#05162463`
#[derive(Debug, Clone, PartialEq)]
pub struct ResPq {
    pub nonce: BigInt,
    pub server_nonce: BigInt,
    pub pq: Vec<u8>,
    pub server_public_key_fingerprints: Vec<i64>,
}

/// `p_q_inner_data_dc#a9f55f95`
#[derive(Debug, Clone, PartialEq)]
pub struct PqInnerDataDc {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: BigInt,
    pub server_nonce: BigInt,
    pub new_nonce: BigInt,
    pub dc: i32,
}

/// `geoPoint#b2a2f663` (`long`/`lat` in the schema)
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub access_hash: i64,
    pub accuracy_radius: Option<i32>,
}

/// The closed set of typed schema objects. Two instances are equal iff
/// their constructors and all field values (recursively) are equal.
#[derive(Debug, Clone, PartialEq)]
pub enum TlObject {
    BoolTrue,
    BoolFalse,
    DcOption(DcOption),
    Config(Box<Config>),
    MissingInvitee(MissingInvitee),
    ResPq(ResPq),
    PqInnerDataDc(PqInnerDataDc),
    GeoPointEmpty,
    GeoPoint(GeoPoint),
}

static EMPTY_PARAMS: &[Param] = &[];

static DC_OPTION_PARAMS: &[Param] = &[
    Param::plain("flags", ParamType::Flags),
    Param::gated("ipv6", ParamType::True, "flags", 0),
    Param::gated("media_only", ParamType::True, "flags", 1),
    Param::gated("tcpo_only", ParamType::True, "flags", 2),
    Param::gated("cdn", ParamType::True, "flags", 3),
    Param::gated("static", ParamType::True, "flags", 4),
    Param::gated("this_port_only", ParamType::True, "flags", 5),
    Param::plain("id", ParamType::Int),
    Param::plain("ip_address", ParamType::String),
    Param::plain("port", ParamType::Int),
    Param::gated("secret", ParamType::Bytes, "flags", 10),
];

static CONFIG_PARAMS: &[Param] = &[
    Param::plain("flags", ParamType::Flags),
    Param::gated("default_p2p_contacts", ParamType::True, "flags", 3),
    Param::gated("preload_featured_stickers", ParamType::True, "flags", 4),
    Param::gated("revoke_pm_inbox", ParamType::True, "flags", 6),
    Param::gated("blocked_mode", ParamType::True, "flags", 8),
    Param::gated("force_try_ipv6", ParamType::True, "flags", 14),
    Param::plain("date", ParamType::Int),
    Param::plain("expires", ParamType::Int),
    Param::plain("test_mode", ParamType::Bool),
    Param::plain("this_dc", ParamType::Int),
    Param::plain("dc_options", ParamType::Vector(&ParamType::Object)),
    Param::plain("dc_txt_domain_name", ParamType::String),
    Param::plain("chat_size_max", ParamType::Int),
    Param::plain("megagroup_size_max", ParamType::Int),
    Param::plain("forwarded_count_max", ParamType::Int),
    Param::plain("online_update_period_ms", ParamType::Int),
    Param::plain("offline_blur_timeout_ms", ParamType::Int),
    Param::plain("offline_idle_timeout_ms", ParamType::Int),
    Param::plain("online_cloud_timeout_ms", ParamType::Int),
    Param::plain("notify_cloud_delay_ms", ParamType::Int),
    Param::plain("notify_default_delay_ms", ParamType::Int),
    Param::plain("push_chat_period_ms", ParamType::Int),
    Param::plain("push_chat_limit", ParamType::Int),
    Param::plain("edit_time_limit", ParamType::Int),
    Param::plain("revoke_time_limit", ParamType::Int),
    Param::plain("revoke_pm_time_limit", ParamType::Int),
    Param::plain("rating_e_decay", ParamType::Int),
    Param::plain("stickers_recent_limit", ParamType::Int),
    Param::plain("channels_read_media_period", ParamType::Int),
    Param::gated("tmp_sessions", ParamType::Int, "flags", 0),
    Param::plain("call_receive_timeout_ms", ParamType::Int),
    Param::plain("call_ring_timeout_ms", ParamType::Int),
    Param::plain("call_connect_timeout_ms", ParamType::Int),
    Param::plain("call_packet_timeout_ms", ParamType::Int),
    Param::plain("me_url_prefix", ParamType::String),
    Param::gated("autoupdate_url_prefix", ParamType::String, "flags", 7),
    Param::gated("gif_search_username", ParamType::String, "flags", 9),
    Param::gated("venue_search_username", ParamType::String, "flags", 10),
    Param::gated("img_search_username", ParamType::String, "flags", 11),
    Param::gated("static_maps_provider", ParamType::String, "flags", 12),
    Param::plain("caption_length_max", ParamType::Int),
    Param::plain("message_length_max", ParamType::Int),
    Param::plain("webfile_dc_id", ParamType::Int),
    Param::gated("suggested_lang_code", ParamType::String, "flags", 2),
    Param::gated("lang_pack_version", ParamType::Int, "flags", 2),
    Param::gated("base_lang_pack_version", ParamType::Int, "flags", 2),
    Param::gated("reactions_default", ParamType::Object, "flags", 15),
    Param::gated("autologin_token", ParamType::String, "flags", 16),
];

static MISSING_INVITEE_PARAMS: &[Param] = &[
    Param::plain("flags", ParamType::Flags),
    Param::gated("premium_would_allow_invite", ParamType::True, "flags", 0),
    Param::gated("premium_required_for_pm", ParamType::True, "flags", 1),
    Param::plain("user_id", ParamType::Long),
];

static RES_PQ_PARAMS: &[Param] = &[
    Param::plain("nonce", ParamType::Int128),
    Param::plain("server_nonce", ParamType::Int128),
    Param::plain("pq", ParamType::Bytes),
    Param::plain(
        "server_public_key_fingerprints",
        ParamType::Vector(&ParamType::Long),
    ),
];

static P_Q_INNER_DATA_DC_PARAMS: &[Param] = &[
    Param::plain("pq", ParamType::Bytes),
    Param::plain("p", ParamType::Bytes),
    Param::plain("q", ParamType::Bytes),
    Param::plain("nonce", ParamType::Int128),
    Param::plain("server_nonce", ParamType::Int128),
    Param::plain("new_nonce", ParamType::Int256),
    Param::plain("dc", ParamType::Int),
];

static GEO_POINT_PARAMS: &[Param] = &[
    Param::plain("flags", ParamType::Flags),
    Param::plain("long", ParamType::Double),
    Param::plain("lat", ParamType::Double),
    Param::plain("access_hash", ParamType::Long),
    Param::gated("accuracy_radius", ParamType::Int, "flags", 0),
];

/// The full shipped schema, consumed once by the registry builder.
pub(crate) fn constructors() -> Vec<(u32, Entry)> {
    vec![
        (
            crate::schema::BOOL_TRUE_ID,
            Entry {
                name: "boolTrue",
                params: EMPTY_PARAMS,
                build: |_| Ok(TlObject::BoolTrue),
            },
        ),
        (
            crate::schema::BOOL_FALSE_ID,
            Entry {
                name: "boolFalse",
                params: EMPTY_PARAMS,
                build: |_| Ok(TlObject::BoolFalse),
            },
        ),
        (
            DC_OPTION_ID,
            Entry {
                name: "dcOption",
                params: DC_OPTION_PARAMS,
                build: build_dc_option,
            },
        ),
        (
            CONFIG_ID,
            Entry {
                name: "config",
                params: CONFIG_PARAMS,
                build: build_config,
            },
        ),
        (
            MISSING_INVITEE_ID,
            Entry {
                name: "missingInvitee",
                params: MISSING_INVITEE_PARAMS,
                build: build_missing_invitee,
            },
        ),
        (
            RES_PQ_ID,
            Entry {
                name: "resPQ",
                params: RES_PQ_PARAMS,
                build: build_res_pq,
            },
        ),
        (
            P_Q_INNER_DATA_DC_ID,
            Entry {
                name: "p_q_inner_data_dc",
                params: P_Q_INNER_DATA_DC_PARAMS,
                build: build_p_q_inner_data_dc,
            },
        ),
        (
            GEO_POINT_EMPTY_ID,
            Entry {
                name: "geoPointEmpty",
                params: EMPTY_PARAMS,
                build: |_| Ok(TlObject::GeoPointEmpty),
            },
        ),
        (
            GEO_POINT_ID,
            Entry {
                name: "geoPoint",
                params: GEO_POINT_PARAMS,
                build: build_geo_point,
            },
        ),
    ]
}

/// Cursor over builder input: field values in descriptor order, `None` for
/// absent optional fields and for flags words.
struct Fields {
    constructor: &'static str,
    values: std::vec::IntoIter<Option<Value>>,
}

impl Fields {
    fn new(constructor: &'static str, values: Vec<Option<Value>>) -> Fields {
        Fields {
            constructor,
            values: values.into_iter(),
        }
    }

    fn next(&mut self) -> Result<Option<Value>, Error> {
        self.values.next().ok_or_else(|| {
            Error::invalid_data(format!("{}: too few field values", self.constructor))
        })
    }

    fn mismatch(&self, want: &str, got: Option<Value>) -> Error {
        Error::invalid_data(format!(
            "{}: expected {want}, got {got:?}",
            self.constructor
        ))
    }

    /// Consumes a flags-word slot; its bits are derived state.
    fn skip(&mut self) -> Result<(), Error> {
        self.next().map(drop)
    }

    /// Bit-only boolean: always materialized, true iff the bit was set.
    fn truthy(&mut self) -> Result<bool, Error> {
        match self.next()? {
            Some(Value::Bool(b)) => Ok(b),
            other => Err(self.mismatch("flag bit", other)),
        }
    }

    fn boolean(&mut self) -> Result<bool, Error> {
        match self.next()? {
            Some(Value::Bool(b)) => Ok(b),
            other => Err(self.mismatch("Bool", other)),
        }
    }

    fn int(&mut self) -> Result<i32, Error> {
        match self.next()? {
            Some(Value::Int(v)) => Ok(v),
            other => Err(self.mismatch("int", other)),
        }
    }

    fn opt_int(&mut self) -> Result<Option<i32>, Error> {
        match self.next()? {
            None => Ok(None),
            Some(Value::Int(v)) => Ok(Some(v)),
            other => Err(self.mismatch("optional int", other)),
        }
    }

    fn long(&mut self) -> Result<i64, Error> {
        match self.next()? {
            Some(Value::Long(v)) => Ok(v),
            other => Err(self.mismatch("long", other)),
        }
    }

    fn int128(&mut self) -> Result<BigInt, Error> {
        match self.next()? {
            Some(Value::Int128(v)) => Ok(v),
            other => Err(self.mismatch("int128", other)),
        }
    }

    fn int256(&mut self) -> Result<BigInt, Error> {
        match self.next()? {
            Some(Value::Int256(v)) => Ok(v),
            other => Err(self.mismatch("int256", other)),
        }
    }

    fn double(&mut self) -> Result<f64, Error> {
        match self.next()? {
            Some(Value::Double(v)) => Ok(v),
            other => Err(self.mismatch("double", other)),
        }
    }

    fn bytes(&mut self) -> Result<Vec<u8>, Error> {
        match self.next()? {
            Some(Value::Bytes(v)) => Ok(v),
            other => Err(self.mismatch("bytes", other)),
        }
    }

    fn opt_bytes(&mut self) -> Result<Option<Vec<u8>>, Error> {
        match self.next()? {
            None => Ok(None),
            Some(Value::Bytes(v)) => Ok(Some(v)),
            other => Err(self.mismatch("optional bytes", other)),
        }
    }

    fn string(&mut self) -> Result<String, Error> {
        match self.next()? {
            Some(Value::String(v)) => Ok(v),
            other => Err(self.mismatch("string", other)),
        }
    }

    fn opt_string(&mut self) -> Result<Option<String>, Error> {
        match self.next()? {
            None => Ok(None),
            Some(Value::String(v)) => Ok(Some(v)),
            other => Err(self.mismatch("optional string", other)),
        }
    }

    fn opt_object(&mut self) -> Result<Option<TlObject>, Error> {
        match self.next()? {
            None => Ok(None),
            Some(Value::Object(v)) => Ok(Some(v)),
            other => Err(self.mismatch("optional object", other)),
        }
    }

    fn vector(&mut self) -> Result<Vec<Value>, Error> {
        match self.next()? {
            Some(Value::Vector(v)) => Ok(v),
            other => Err(self.mismatch("vector", other)),
        }
    }

    fn long_vector(&mut self) -> Result<Vec<i64>, Error> {
        self.vector()?
            .into_iter()
            .map(|item| match item {
                Value::Long(v) => Ok(v),
                other => Err(self.mismatch("long element", Some(other))),
            })
            .collect()
    }
}

fn build_dc_option(values: Vec<Option<Value>>) -> Result<TlObject, Error> {
    let mut f = Fields::new("dcOption", values);
    f.skip()?;
    Ok(TlObject::DcOption(DcOption {
        ipv6: f.truthy()?,
        media_only: f.truthy()?,
        tcpo_only: f.truthy()?,
        cdn: f.truthy()?,
        is_static: f.truthy()?,
        this_port_only: f.truthy()?,
        id: f.int()?,
        ip_address: f.string()?,
        port: f.int()?,
        secret: f.opt_bytes()?,
    }))
}

fn build_config(values: Vec<Option<Value>>) -> Result<TlObject, Error> {
    let mut f = Fields::new("config", values);
    f.skip()?;
    let default_p2p_contacts = f.truthy()?;
    let preload_featured_stickers = f.truthy()?;
    let revoke_pm_inbox = f.truthy()?;
    let blocked_mode = f.truthy()?;
    let force_try_ipv6 = f.truthy()?;
    let date = f.int()?;
    let expires = f.int()?;
    let test_mode = f.boolean()?;
    let this_dc = f.int()?;
    let dc_options = f
        .vector()?
        .into_iter()
        .map(|item| match item {
            Value::Object(TlObject::DcOption(dc)) => Ok(dc),
            other => Err(Error::invalid_data(format!(
                "config: dc_options element is not a dcOption: {other:?}"
            ))),
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(TlObject::Config(Box::new(Config {
        default_p2p_contacts,
        preload_featured_stickers,
        revoke_pm_inbox,
        blocked_mode,
        force_try_ipv6,
        date,
        expires,
        test_mode,
        this_dc,
        dc_options,
        dc_txt_domain_name: f.string()?,
        chat_size_max: f.int()?,
        megagroup_size_max: f.int()?,
        forwarded_count_max: f.int()?,
        online_update_period_ms: f.int()?,
        offline_blur_timeout_ms: f.int()?,
        offline_idle_timeout_ms: f.int()?,
        online_cloud_timeout_ms: f.int()?,
        notify_cloud_delay_ms: f.int()?,
        notify_default_delay_ms: f.int()?,
        push_chat_period_ms: f.int()?,
        push_chat_limit: f.int()?,
        edit_time_limit: f.int()?,
        revoke_time_limit: f.int()?,
        revoke_pm_time_limit: f.int()?,
        rating_e_decay: f.int()?,
        stickers_recent_limit: f.int()?,
        channels_read_media_period: f.int()?,
        tmp_sessions: f.opt_int()?,
        call_receive_timeout_ms: f.int()?,
        call_ring_timeout_ms: f.int()?,
        call_connect_timeout_ms: f.int()?,
        call_packet_timeout_ms: f.int()?,
        me_url_prefix: f.string()?,
        autoupdate_url_prefix: f.opt_string()?,
        gif_search_username: f.opt_string()?,
        venue_search_username: f.opt_string()?,
        img_search_username: f.opt_string()?,
        static_maps_provider: f.opt_string()?,
        caption_length_max: f.int()?,
        message_length_max: f.int()?,
        webfile_dc_id: f.int()?,
        suggested_lang_code: f.opt_string()?,
        lang_pack_version: f.opt_int()?,
        base_lang_pack_version: f.opt_int()?,
        reactions_default: f.opt_object()?.map(Box::new),
        autologin_token: f.opt_string()?,
    })))
}

fn build_missing_invitee(values: Vec<Option<Value>>) -> Result<TlObject, Error> {
    let mut f = Fields::new("missingInvitee", values);
    f.skip()?;
    Ok(TlObject::MissingInvitee(MissingInvitee {
        premium_would_allow_invite: f.truthy()?,
        premium_required_for_pm: f.truthy()?,
        user_id: f.long()?,
    }))
}

fn build_res_pq(values: Vec<Option<Value>>) -> Result<TlObject, Error> {
    let mut f = Fields::new("resPQ", values);
    Ok(TlObject::ResPq(ResPq {
        nonce: f.int128()?,
        server_nonce: f.int128()?,
        pq: f.bytes()?,
        server_public_key_fingerprints: f.long_vector()?,
    }))
}

fn build_p_q_inner_data_dc(values: Vec<Option<Value>>) -> Result<TlObject, Error> {
    let mut f = Fields::new("p_q_inner_data_dc", values);
    Ok(TlObject::PqInnerDataDc(PqInnerDataDc {
        pq: f.bytes()?,
        p: f.bytes()?,
        q: f.bytes()?,
        nonce: f.int128()?,
        server_nonce: f.int128()?,
        new_nonce: f.int256()?,
        dc: f.int()?,
    }))
}

fn build_geo_point(values: Vec<Option<Value>>) -> Result<TlObject, Error> {
    let mut f = Fields::new("geoPoint", values);
    f.skip()?;
    Ok(TlObject::GeoPoint(GeoPoint {
        longitude: f.double()?,
        latitude: f.double()?,
        access_hash: f.long()?,
        accuracy_radius: f.opt_int()?,
    }))
}

impl TlObject {
    pub fn constructor_id(&self) -> u32 {
        match self {
            TlObject::BoolTrue => crate::schema::BOOL_TRUE_ID,
            TlObject::BoolFalse => crate::schema::BOOL_FALSE_ID,
            TlObject::DcOption(_) => DC_OPTION_ID,
            TlObject::Config(_) => CONFIG_ID,
            TlObject::MissingInvitee(_) => MISSING_INVITEE_ID,
            TlObject::ResPq(_) => RES_PQ_ID,
            TlObject::PqInnerDataDc(_) => P_Q_INNER_DATA_DC_ID,
            TlObject::GeoPointEmpty => GEO_POINT_EMPTY_ID,
            TlObject::GeoPoint(_) => GEO_POINT_ID,
        }
    }

    /// The object's own parameter descriptor, in declaration order.
    pub fn params(&self) -> &'static [Param] {
        match self {
            TlObject::BoolTrue | TlObject::BoolFalse | TlObject::GeoPointEmpty => EMPTY_PARAMS,
            TlObject::DcOption(_) => DC_OPTION_PARAMS,
            TlObject::Config(_) => CONFIG_PARAMS,
            TlObject::MissingInvitee(_) => MISSING_INVITEE_PARAMS,
            TlObject::ResPq(_) => RES_PQ_PARAMS,
            TlObject::PqInnerDataDc(_) => P_Q_INNER_DATA_DC_PARAMS,
            TlObject::GeoPoint(_) => GEO_POINT_PARAMS,
        }
    }

    /// Field values in descriptor order; `None` for flags words and for
    /// absent optional fields. The inverse of the variant builders.
    pub(crate) fn field_values(&self) -> Vec<Option<Value>> {
        match self {
            TlObject::BoolTrue | TlObject::BoolFalse | TlObject::GeoPointEmpty => Vec::new(),
            TlObject::DcOption(d) => vec![
                None,
                Some(Value::Bool(d.ipv6)),
                Some(Value::Bool(d.media_only)),
                Some(Value::Bool(d.tcpo_only)),
                Some(Value::Bool(d.cdn)),
                Some(Value::Bool(d.is_static)),
                Some(Value::Bool(d.this_port_only)),
                Some(Value::Int(d.id)),
                Some(Value::String(d.ip_address.clone())),
                Some(Value::Int(d.port)),
                d.secret.clone().map(Value::Bytes),
            ],
            TlObject::Config(c) => vec![
                None,
                Some(Value::Bool(c.default_p2p_contacts)),
                Some(Value::Bool(c.preload_featured_stickers)),
                Some(Value::Bool(c.revoke_pm_inbox)),
                Some(Value::Bool(c.blocked_mode)),
                Some(Value::Bool(c.force_try_ipv6)),
                Some(Value::Int(c.date)),
                Some(Value::Int(c.expires)),
                Some(Value::Bool(c.test_mode)),
                Some(Value::Int(c.this_dc)),
                Some(Value::Vector(
                    c.dc_options
                        .iter()
                        .cloned()
                        .map(|dc| Value::Object(TlObject::DcOption(dc)))
                        .collect(),
                )),
                Some(Value::String(c.dc_txt_domain_name.clone())),
                Some(Value::Int(c.chat_size_max)),
                Some(Value::Int(c.megagroup_size_max)),
                Some(Value::Int(c.forwarded_count_max)),
                Some(Value::Int(c.online_update_period_ms)),
                Some(Value::Int(c.offline_blur_timeout_ms)),
                Some(Value::Int(c.offline_idle_timeout_ms)),
                Some(Value::Int(c.online_cloud_timeout_ms)),
                Some(Value::Int(c.notify_cloud_delay_ms)),
                Some(Value::Int(c.notify_default_delay_ms)),
                Some(Value::Int(c.push_chat_period_ms)),
                Some(Value::Int(c.push_chat_limit)),
                Some(Value::Int(c.edit_time_limit)),
                Some(Value::Int(c.revoke_time_limit)),
                Some(Value::Int(c.revoke_pm_time_limit)),
                Some(Value::Int(c.rating_e_decay)),
                Some(Value::Int(c.stickers_recent_limit)),
                Some(Value::Int(c.channels_read_media_period)),
                c.tmp_sessions.map(Value::Int),
                Some(Value::Int(c.call_receive_timeout_ms)),
                Some(Value::Int(c.call_ring_timeout_ms)),
                Some(Value::Int(c.call_connect_timeout_ms)),
                Some(Value::Int(c.call_packet_timeout_ms)),
                Some(Value::String(c.me_url_prefix.clone())),
                c.autoupdate_url_prefix.clone().map(Value::String),
                c.gif_search_username.clone().map(Value::String),
                c.venue_search_username.clone().map(Value::String),
                c.img_search_username.clone().map(Value::String),
                c.static_maps_provider.clone().map(Value::String),
                Some(Value::Int(c.caption_length_max)),
                Some(Value::Int(c.message_length_max)),
                Some(Value::Int(c.webfile_dc_id)),
                c.suggested_lang_code.clone().map(Value::String),
                c.lang_pack_version.map(Value::Int),
                c.base_lang_pack_version.map(Value::Int),
                c.reactions_default
                    .clone()
                    .map(|reaction| Value::Object(*reaction)),
                c.autologin_token.clone().map(Value::String),
            ],
            TlObject::MissingInvitee(m) => vec![
                None,
                Some(Value::Bool(m.premium_would_allow_invite)),
                Some(Value::Bool(m.premium_required_for_pm)),
                Some(Value::Long(m.user_id)),
            ],
            TlObject::ResPq(r) => vec![
                Some(Value::Int128(r.nonce.clone())),
                Some(Value::Int128(r.server_nonce.clone())),
                Some(Value::Bytes(r.pq.clone())),
                Some(Value::Vector(
                    r.server_public_key_fingerprints
                        .iter()
                        .copied()
                        .map(Value::Long)
                        .collect(),
                )),
            ],
            TlObject::PqInnerDataDc(p) => vec![
                Some(Value::Bytes(p.pq.clone())),
                Some(Value::Bytes(p.p.clone())),
                Some(Value::Bytes(p.q.clone())),
                Some(Value::Int128(p.nonce.clone())),
                Some(Value::Int128(p.server_nonce.clone())),
                Some(Value::Int256(p.new_nonce.clone())),
                Some(Value::Int(p.dc)),
            ],
            TlObject::GeoPoint(g) => vec![
                None,
                Some(Value::Double(g.longitude)),
                Some(Value::Double(g.latitude)),
                Some(Value::Long(g.access_hash)),
                g.accuracy_radius.map(Value::Int),
            ],
        }
    }

    /// Re-serializes this object through the primitive writer: constructor
    /// identifier, computed flags word(s), then fields in descriptor order.
    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        crate::serialize::serialize(self)
    }
}
