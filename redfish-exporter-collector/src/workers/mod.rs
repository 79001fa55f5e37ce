// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! One module per resource group (§4.D). Each `run` fetches its group's
//! resources and returns the samples it found, or `None` if the group's
//! entry-point GET itself failed - the pipeline counts that as one scrape
//! error and moves on to the next group.

pub mod events;
pub mod firmware;
pub mod memory;
pub mod network;
pub mod power;
pub mod processors;
pub mod sensors;
pub mod storage;
pub mod system;
pub mod vendor_extra;
