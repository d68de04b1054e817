use crate::error::{Result, SwapperError};
use solana_sdk::pubkey::Pubkey;

/// 按字段顺序读取账户数据，小端序
pub struct LayoutReader<'a> {
    account: Pubkey,
    data: &'a [u8],
    offset: usize,
}

impl<'a> LayoutReader<'a> {
    pub fn new(account: Pubkey, data: &'a [u8]) -> Self {
        Self {
            account,
            data,
            offset: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let end = self.offset + N;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(SwapperError::AccountDataTooShort {
                account: self.account,
                expected: end,
                actual: self.data.len(),
            })?;
        self.offset = end;
        // 长度已由切片保证
        let mut out = [0_u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn read_pubkey(&mut self) -> Result<Pubkey> {
        Ok(Pubkey::new_from_array(self.take()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_in_order() {
        let key = Pubkey::new_unique();
        let mut data = vec![7_u8];
        data.extend(513_u16.to_le_bytes());
        data.extend(key.to_bytes());
        data.extend(u64::MAX.to_le_bytes());
        let mut reader = LayoutReader::new(Pubkey::default(), &data);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_u16().unwrap(), 513);
        assert_eq!(reader.read_pubkey().unwrap(), key);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX);
        assert_eq!(reader.offset(), data.len());
    }

    #[test]
    fn test_read_past_end() {
        let account = Pubkey::new_unique();
        let data = [1_u8; 5];
        let mut reader = LayoutReader::new(account, &data);
        assert_eq!(reader.read_u16().unwrap(), 0x0101);
        match reader.read_u64() {
            Err(SwapperError::AccountDataTooShort {
                account: key,
                expected,
                actual,
            }) => {
                assert_eq!(key, account);
                assert_eq!(expected, 10);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        // 失败不推进游标
        assert_eq!(reader.offset(), 2);
    }
}
