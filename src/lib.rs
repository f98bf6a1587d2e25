/*!
Bbizoom decodes zoom-level summary data blocks from bigWig and bigBed (bbi)
files.

The original file format specification for bigWig and bigBed files is
defined in this paper: <https://doi.org/10.1093/bioinformatics/btq351>

Every bbi zoom level stores runs of fixed-size summary records in
contiguous, possibly compressed, data blocks located by an R+ spatial
index. This crate covers the per-block half of reading a zoom level:
fetching a block's byte range from a seekable source, inflating it if the
file stores blocks compressed, decoding the packed records under the
file's byte order, and keeping the records matching a selection region.
Walking the index to find blocks and mapping chromosome ids to names are
the caller's side of the contract: [`Block`] and the id map come in as
plain values.

## Example

```rust,no_run
# use std::collections::HashMap;
# use std::error::Error;
# use std::fs::File;
# fn main() -> Result<(), Box<dyn Error>> {
use bbizoom::{get_zoom_block_records, read_zoom_block_data, Block, ChromRegion};
use byteordered::Endianness;

// The file's spatial index produced this location for a zoom level 2
// block; the file header declared a 16 KiB decompression buffer.
let block = Block {
    offset: 4096,
    size: 1024,
    bounds: ChromRegion::new(0, 0, 0, 1_000_000),
};

let mut file = File::open("example.bigWig")?;
let data = read_zoom_block_data(&mut file, &block, 2, 16384)?;

let mut chrom_map = HashMap::new();
chrom_map.insert(0, "chr1".to_string());

let selection = ChromRegion::new(0, 10_000, 0, 20_000);
let records = get_zoom_block_records(
    &data,
    2,
    Endianness::Little,
    &chrom_map,
    block.bounds,
    selection,
    false,
)?;
for record in &records {
    println!("{}", record);
}
# Ok(())
# }
```
*/

mod bbi;

pub use bbi::*;
