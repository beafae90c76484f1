use crate::protocol::enums::data_type_kind::DataTypeKind;

impl DataTypeKind {
    pub const ALL: [DataTypeKind; 19] = [
        DataTypeKind::ServerId,
        DataTypeKind::Gpt0,
        DataTypeKind::Gpc0,
        DataTypeKind::Gpc0Rate,
        DataTypeKind::ConnCnt,
        DataTypeKind::ConnRate,
        DataTypeKind::ConnCur,
        DataTypeKind::SessCnt,
        DataTypeKind::SessRate,
        DataTypeKind::HttpReqCnt,
        DataTypeKind::HttpReqRate,
        DataTypeKind::HttpErrCnt,
        DataTypeKind::HttpErrRate,
        DataTypeKind::BytesInCnt,
        DataTypeKind::BytesInRate,
        DataTypeKind::BytesOutCnt,
        DataTypeKind::BytesOutRate,
        DataTypeKind::Gpc1,
        DataTypeKind::Gpc1Rate,
    ];

    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Set bits of `mask` in ascending order, unknown bits are ignored.
    pub fn from_bitmask(mask: u64) -> Vec<DataTypeKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| (mask >> kind.bit()) & 1 != 0)
            .collect()
    }

    pub fn bitmask(kinds: &[DataTypeKind]) -> u64 {
        kinds.iter().fold(0u64, |mask, kind| mask | (1u64 << kind.bit()))
    }

    /// Single varint counters.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            DataTypeKind::Gpt0
                | DataTypeKind::Gpc0
                | DataTypeKind::ConnCnt
                | DataTypeKind::ConnCur
                | DataTypeKind::SessCnt
                | DataTypeKind::HttpReqCnt
                | DataTypeKind::HttpErrCnt
                | DataTypeKind::Gpc1
        )
    }

    /// Read as one varint, never written back out.
    pub fn is_byte_counter(self) -> bool {
        matches!(self, DataTypeKind::BytesInCnt | DataTypeKind::BytesOutCnt)
    }

    /// Whether entry updates carry a field for this kind at all.
    pub fn is_on_wire(self) -> bool {
        self.is_scalar()
            || self.is_byte_counter()
            || matches!(self, DataTypeKind::ServerId | DataTypeKind::HttpReqRate)
    }

    pub fn name(self) -> &'static str {
        match self {
            DataTypeKind::ServerId => "server_id",
            DataTypeKind::Gpt0 => "gpt0",
            DataTypeKind::Gpc0 => "gpc0",
            DataTypeKind::Gpc0Rate => "gpc0_rate",
            DataTypeKind::ConnCnt => "conn_cnt",
            DataTypeKind::ConnRate => "conn_rate",
            DataTypeKind::ConnCur => "conn_cur",
            DataTypeKind::SessCnt => "sess_cnt",
            DataTypeKind::SessRate => "sess_rate",
            DataTypeKind::HttpReqCnt => "http_req_cnt",
            DataTypeKind::HttpReqRate => "http_req_rate",
            DataTypeKind::HttpErrCnt => "http_err_cnt",
            DataTypeKind::HttpErrRate => "http_err_rate",
            DataTypeKind::BytesInCnt => "bytes_in_cnt",
            DataTypeKind::BytesInRate => "bytes_in_rate",
            DataTypeKind::BytesOutCnt => "bytes_out_cnt",
            DataTypeKind::BytesOutRate => "bytes_out_rate",
            DataTypeKind::Gpc1 => "gpc1",
            DataTypeKind::Gpc1Rate => "gpc1_rate",
        }
    }
}
